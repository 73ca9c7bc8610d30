pub mod use_cases;

mod validations;

