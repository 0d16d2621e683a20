pub mod purchase_order;

pub use purchase_order::PurchaseOrderPage;
