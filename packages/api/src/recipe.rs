//! # Recipe service: recipes, tags and ingredients
//!
//! Every call maps to exactly one request under `recipe/` and returns the raw
//! [`ApiResponse`]; decoding is left to the caller. Path parameters are always
//! the opaque [`EncodedId`].
//!
//! Tags and ingredients share one endpoint shape, selected by
//! [`AttrKind`].

use serde_json::json;
use store::config::ApiConfig;
use store::{EncodedId, ImageUpload, RecipeDraft, RecipeFilters, Session};

use crate::auth::auth_header;
use crate::error::ApiError;
use crate::http::{execute, with_query, ApiRequest, ApiResponse, FilePart, HttpClient, Method};

/// Multipart field name the upload endpoint expects.
pub const IMAGE_FIELD: &str = "image";

/// The two recipe attribute resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrKind {
    Tag,
    Ingredient,
}

impl AttrKind {
    fn path(self) -> &'static str {
        match self {
            AttrKind::Tag => "tags/",
            AttrKind::Ingredient => "ingredients/",
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecipeService<H> {
    http: H,
    base: String,
    session: Session,
}

impl<H: HttpClient> RecipeService<H> {
    pub fn new(http: H, config: &ApiConfig, session: Session) -> Self {
        Self {
            http,
            base: config.recipe_url(),
            session,
        }
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, format!("{}{}", self.base, path))
            .headers(auth_header(self.session.current_user().as_ref()))
    }

    pub async fn list_recipes(&self, filters: &RecipeFilters) -> Result<ApiResponse, ApiError> {
        let mut request = self.request(Method::Get, "recipes/");
        request.url = with_query(&request.url, &filters.query_pairs())?;
        execute(&self.http, request).await
    }

    pub async fn get_recipe(&self, id: &EncodedId) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::Get, &format!("recipes/{id}/"));
        execute(&self.http, request).await
    }

    pub async fn create_recipe(&self, recipe: &RecipeDraft) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::Post, "recipes/").json(recipe)?;
        execute(&self.http, request).await
    }

    pub async fn update_recipe(
        &self,
        id: &EncodedId,
        recipe: &RecipeDraft,
    ) -> Result<ApiResponse, ApiError> {
        let request = self
            .request(Method::Put, &format!("recipes/{id}/"))
            .json(recipe)?;
        execute(&self.http, request).await
    }

    pub async fn delete_recipe(&self, id: &EncodedId) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::Delete, &format!("recipes/{id}/"));
        execute(&self.http, request).await
    }

    pub async fn upload_image(
        &self,
        id: &EncodedId,
        image: &ImageUpload,
    ) -> Result<ApiResponse, ApiError> {
        let request = self
            .request(Method::Post, &format!("recipes/{id}/upload-image/"))
            .multipart(FilePart {
                field: IMAGE_FIELD.to_string(),
                file_name: image.file_name.clone(),
                content_type: image.content_type.clone(),
                bytes: image.bytes.clone(),
            });
        execute(&self.http, request).await
    }

    pub async fn list_attrs(&self, kind: AttrKind) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::Get, kind.path());
        execute(&self.http, request).await
    }

    pub async fn create_attr(&self, kind: AttrKind, name: &str) -> Result<ApiResponse, ApiError> {
        let request = self
            .request(Method::Post, kind.path())
            .json(&json!({ "name": name }))?;
        execute(&self.http, request).await
    }

    pub async fn rename_attr(
        &self,
        kind: AttrKind,
        id: &EncodedId,
        name: &str,
    ) -> Result<ApiResponse, ApiError> {
        let request = self
            .request(Method::Patch, &format!("{}{id}/", kind.path()))
            .json(&json!({ "name": name }))?;
        execute(&self.http, request).await
    }

    pub async fn delete_attr(&self, kind: AttrKind, id: &EncodedId) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::Delete, &format!("{}{id}/", kind.path()));
        execute(&self.http, request).await
    }
}
