pub mod links;
pub mod tag_parsing;
pub mod tool_category;
pub mod views;
pub mod works_filter;
