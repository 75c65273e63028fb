pub mod app;
pub mod batch_info;
pub mod batch_view;
pub mod catalog_state;
pub mod home_view;
pub mod journey_timeline;
pub mod learn_view;
pub mod partner_map;
pub mod partners_view;
pub mod qr_scanner;
pub mod scan_view;
pub mod share;
pub mod timer;
