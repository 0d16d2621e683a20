#[cfg(test)]
mod common;

#[cfg(test)]
mod config_tests;

#[cfg(test)]
mod derivation_tests;



#[cfg(test)]
mod talent_count_tests;
