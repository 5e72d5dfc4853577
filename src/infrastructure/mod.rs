pub mod json_lines;
pub mod order_repo;
