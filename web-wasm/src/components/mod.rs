pub mod back_to_top;
pub mod blog;
pub mod book_list;
pub mod career_path;
pub mod header;
pub mod home;
pub mod project_card;
pub mod python_runner;
pub mod tech_stack;
pub mod world_map;
