//! Recipe store: recipe list, the recipe being viewed, tags and ingredients.

use api::{ApiError, AttrKind, HttpClient, RecipeService};
use store::cache::{self, CacheOutcome, Keyed, Synced};
use store::{
    EncodedId, ImageUpload, Ingredient, Recipe, RecipeDraft, RecipeFilters, RecipeImage, Tag,
    UserId,
};

use super::{with_async, RequestStatus, StateCell, Tracked, GENERIC_ERROR};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeState {
    pub recipes: Vec<Recipe>,
    pub current_recipe: Option<Recipe>,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<Ingredient>,
    pub status: RequestStatus,
}

impl Tracked for RecipeState {
    fn status(&self) -> &RequestStatus {
        &self.status
    }
    fn status_mut(&mut self) -> &mut RequestStatus {
        &mut self.status
    }
}

fn warn_missing(kind: &str, id: &EncodedId, outcome: CacheOutcome) {
    if outcome.is_missing() {
        tracing::warn!("{} {} is not cached; list left unchanged", kind, id);
    }
}

#[derive(Clone, Debug)]
pub struct RecipeStore<H, C> {
    service: RecipeService<H>,
    state: C,
}

impl<H: HttpClient, C: StateCell<RecipeState>> RecipeStore<H, C> {
    pub fn new(service: RecipeService<H>, state: C) -> Self {
        Self { service, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub async fn fetch_all_recipes(&self, filters: &RecipeFilters) -> Result<Vec<Recipe>, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let recipes: Vec<Recipe> = self.service.list_recipes(filters).await?.json()?;
            self.state
                .update_state(|s| cache::replace_all(&mut s.recipes, recipes.clone()));
            tracing::debug!("Cached {} recipes", recipes.len());
            Ok(recipes)
        })
        .await
    }

    /// Recipes owned by `user`.
    pub async fn fetch_user_recipes(&self, user: UserId) -> Result<Vec<Recipe>, ApiError> {
        self.fetch_all_recipes(&RecipeFilters::for_user(user)).await
    }

    pub async fn fetch_recipe(&self, id: &EncodedId) -> Result<Recipe, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let recipe: Recipe = self.service.get_recipe(id).await?.json()?;
            self.state
                .update_state(|s| s.current_recipe = Some(recipe.clone()));
            Ok(recipe)
        })
        .await
    }

    pub async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let recipe: Recipe = self.service.create_recipe(draft).await?.json()?;
            self.state
                .update_state(|s| cache::append(&mut s.recipes, recipe.clone()));
            Ok(recipe)
        })
        .await
    }

    pub async fn update_recipe(
        &self,
        id: &EncodedId,
        draft: &RecipeDraft,
    ) -> Result<Synced<Recipe>, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let recipe: Recipe = self.service.update_recipe(id, draft).await?.json()?;
            let outcome = self.state.update_state(|s| {
                s.current_recipe = Some(recipe.clone());
                cache::merge(&mut s.recipes, recipe.clone())
            });
            warn_missing("Recipe", recipe.key(), outcome);
            Ok(Synced {
                entity: recipe,
                cache: outcome,
            })
        })
        .await
    }

    pub async fn delete_recipe(&self, id: &EncodedId) -> Result<CacheOutcome, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            self.service.delete_recipe(id).await?;
            Ok(self.state.update_state(|s| {
                if s.current_recipe.as_ref().is_some_and(|r| &r.encoded_id == id) {
                    s.current_recipe = None;
                }
                cache::remove(&mut s.recipes, id)
            }))
        })
        .await
    }

    /// Upload a recipe image and point the cached copies at the new URL.
    pub async fn upload_recipe_image(
        &self,
        id: &EncodedId,
        image: &ImageUpload,
    ) -> Result<Synced<RecipeImage>, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let uploaded: RecipeImage = self.service.upload_image(id, image).await?.json()?;
            let outcome = self.state.update_state(|s| {
                if let Some(current) = s.current_recipe.as_mut().filter(|r| &r.encoded_id == id) {
                    current.image = uploaded.image.clone();
                }
                cache::merge_with(&mut s.recipes, id, |r| r.image = uploaded.image.clone())
            });
            Ok(Synced {
                entity: uploaded,
                cache: outcome,
            })
        })
        .await
    }

    pub async fn fetch_all_tags(&self) -> Result<Vec<Tag>, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let tags: Vec<Tag> = self.service.list_attrs(AttrKind::Tag).await?.json()?;
            self.state
                .update_state(|s| cache::replace_all(&mut s.tags, tags.clone()));
            Ok(tags)
        })
        .await
    }

    pub async fn fetch_all_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let ingredients: Vec<Ingredient> =
                self.service.list_attrs(AttrKind::Ingredient).await?.json()?;
            self.state
                .update_state(|s| cache::replace_all(&mut s.ingredients, ingredients.clone()));
            Ok(ingredients)
        })
        .await
    }

    pub async fn create_tag(&self, name: &str) -> Result<Tag, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let tag: Tag = self.service.create_attr(AttrKind::Tag, name).await?.json()?;
            self.state
                .update_state(|s| cache::append(&mut s.tags, tag.clone()));
            Ok(tag)
        })
        .await
    }

    pub async fn create_ingredient(&self, name: &str) -> Result<Ingredient, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let ingredient: Ingredient = self
                .service
                .create_attr(AttrKind::Ingredient, name)
                .await?
                .json()?;
            self.state
                .update_state(|s| cache::append(&mut s.ingredients, ingredient.clone()));
            Ok(ingredient)
        })
        .await
    }

    pub async fn rename_tag(&self, id: &EncodedId, name: &str) -> Result<Synced<Tag>, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let tag: Tag = self.service.rename_attr(AttrKind::Tag, id, name).await?.json()?;
            let outcome = self
                .state
                .update_state(|s| cache::merge(&mut s.tags, tag.clone()));
            warn_missing("Tag", id, outcome);
            Ok(Synced {
                entity: tag,
                cache: outcome,
            })
        })
        .await
    }

    pub async fn rename_ingredient(
        &self,
        id: &EncodedId,
        name: &str,
    ) -> Result<Synced<Ingredient>, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let ingredient: Ingredient = self
                .service
                .rename_attr(AttrKind::Ingredient, id, name)
                .await?
                .json()?;
            let outcome = self
                .state
                .update_state(|s| cache::merge(&mut s.ingredients, ingredient.clone()));
            warn_missing("Ingredient", id, outcome);
            Ok(Synced {
                entity: ingredient,
                cache: outcome,
            })
        })
        .await
    }

    pub async fn delete_tag(&self, id: &EncodedId) -> Result<CacheOutcome, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            self.service.delete_attr(AttrKind::Tag, id).await?;
            Ok(self.state.update_state(|s| cache::remove(&mut s.tags, id)))
        })
        .await
    }

    pub async fn delete_ingredient(&self, id: &EncodedId) -> Result<CacheOutcome, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            self.service.delete_attr(AttrKind::Ingredient, id).await?;
            Ok(self
                .state
                .update_state(|s| cache::remove(&mut s.ingredients, id)))
        })
        .await
    }

    pub fn reset_state(&self) {
        self.state.update_state(|s| *s = RecipeState::default());
    }
}
