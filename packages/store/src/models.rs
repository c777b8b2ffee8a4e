//! # Domain models for recipes, comments and users
//!
//! Defines the data structures exchanged with the recipe REST API. Every type is
//! `Serialize + Deserialize` so the same struct decodes a server payload, is cached
//! by the UI stores, and (for [`AuthUser`]) is persisted as the session blob.
//!
//! ## Identifiers
//!
//! Recipes, comments, tags and ingredients are addressed by their opaque
//! [`EncodedId`] (the API's `encoded_id` field). The raw numeric `id` the server
//! also sends is never read. Users only have a numeric [`UserId`].
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | Public profile: id, email, display name. |
//! | [`AuthUser`] | A [`User`] plus its bearer token; the persisted session record. |
//! | [`Recipe`] | A recipe with its tags, ingredients and optional image URL. |
//! | [`Tag`] / [`Ingredient`] | Shared recipe attributes. |
//! | [`Comment`] | A comment on one recipe, owned by one [`CommentAuthor`]. |
//!
//! Drafts ([`RecipeDraft`], [`CommentDraft`], [`NewUser`], [`UserUpdate`]) are the
//! request bodies for create/update calls.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier used in routes and resource paths: `"k5Jx9ab"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedId(String);

impl EncodedId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EncodedId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EncodedId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Numeric user identifier as issued by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(UserId)
    }
}

/// Public user profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// The logged-in user together with its API token.
///
/// Serialised flat (`{"id":1,"email":..,"name":..,"token":..}`) because that is
/// the shape kept in client-side storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

impl AuthUser {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.user.id
    }

    pub fn display_name(&self) -> &str {
        self.user.display_name()
    }
}

/// Body for `POST user/create/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Body for `PATCH user/me/`. Unset fields are left untouched server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    /// Apply the non-secret fields of this update to a cached user.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
    }
}

/// Response of `POST user/token/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub encoded_id: EncodedId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub encoded_id: EncodedId,
    pub name: String,
}

/// A tag or ingredient referenced by name in a recipe draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    pub name: String,
}

impl NameRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub encoded_id: EncodedId,
    pub title: String,
    #[serde(default)]
    pub time_minutes: u32,
    /// Decimal price as sent by the API: `"5.50"`.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub link: String,
    /// Only present on detail responses.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user.as_ref().is_some_and(|owner| owner.id == user)
    }
}

/// Body for recipe create (`POST`) and update (`PUT`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub time_minutes: u32,
    pub price: String,
    pub link: String,
    pub description: String,
    pub tags: Vec<NameRef>,
    pub ingredients: Vec<NameRef>,
}

impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            time_minutes: recipe.time_minutes,
            price: recipe.price.clone(),
            link: recipe.link.clone(),
            description: recipe.description.clone(),
            tags: recipe.tags.iter().map(|t| NameRef::new(&t.name)).collect(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|i| NameRef::new(&i.name))
                .collect(),
        }
    }
}

/// Response of the image upload endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeImage {
    pub encoded_id: EncodedId,
    pub image: Option<String>,
}

/// An image file selected for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Query filters for the recipe list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeFilters {
    pub tags: Vec<EncodedId>,
    pub ingredients: Vec<EncodedId>,
    pub user: Option<UserId>,
}

impl RecipeFilters {
    pub fn for_user(user: UserId) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    /// Query pairs in the API's format; empty filters produce no pairs.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let join = |ids: &[EncodedId]| {
            ids.iter()
                .map(EncodedId::as_str)
                .collect::<Vec<_>>()
                .join(",")
        };
        let mut pairs = Vec::new();
        if !self.tags.is_empty() {
            pairs.push(("tags", join(&self.tags)));
        }
        if !self.ingredients.is_empty() {
            pairs.push(("ingredients", join(&self.ingredients)));
        }
        if let Some(user) = self.user {
            pairs.push(("userId", user.to_string()));
        }
        pairs
    }
}

/// The owner of a comment as embedded by the API (name is optional there).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl CommentAuthor {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub encoded_id: EncodedId,
    pub content: String,
    pub user: CommentAuthor,
    #[serde(default)]
    pub encoded_recipe_id: Option<EncodedId>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Body for comment create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub content: String,
    pub recipe: EncodedId,
}

impl CommentDraft {
    pub fn new(content: impl Into<String>, recipe: EncodedId) -> Self {
        Self {
            content: content.into(),
            recipe,
        }
    }
}
