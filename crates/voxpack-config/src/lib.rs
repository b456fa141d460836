pub mod defaults;
pub mod loader;
pub mod validator;

pub use loader::{
    load_default_profile, load_profile_file, load_profile_from_str, load_validated_profile,
    profile_to_ron, LoadError,
};
pub use validator::{validate_profile, ValidationError};
