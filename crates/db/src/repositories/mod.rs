//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Public entry points take `&PgPool`; ingredient helpers also accept a
//! transaction so recipe writes can stay atomic.

pub mod ingredient_repo;
pub mod recipe_repo;

pub use ingredient_repo::IngredientRepo;
pub use recipe_repo::RecipeRepo;
