pub mod version_string;
