pub mod kpi_card;
pub mod location_input;
pub mod route_table;
pub mod stop_list;
pub mod toast;
