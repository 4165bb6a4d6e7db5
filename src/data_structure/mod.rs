pub mod array_list;
pub mod dl_list;
pub mod sl_list;
