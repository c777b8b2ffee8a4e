mod home;
pub use home::{Home, NotFound};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod recipes;
pub use recipes::Recipes;

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod recipe_edit;
pub use recipe_edit::{RecipeCreate, RecipeEdit};

mod attributes;

mod profile;
pub use profile::Profile;

mod user_profile;
pub use user_profile::UserProfile;
