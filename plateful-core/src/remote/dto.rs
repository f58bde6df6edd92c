use serde::{Deserialize, Serialize};

use crate::types::Recipe;

/// A recipe as the remote catalogue serves it.
///
/// Field-for-field mirror of [`Recipe`], keyed by the same JSON names. The
/// split keeps the wire shape free to drift from the domain shape without
/// touching consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub headline: String,
    pub time: String,
    pub difficulty: String,
    pub calories: String,
    pub carbos: String,
    pub fats: String,
    pub proteins: String,
    pub image: String,
    pub thumb: String,
}

impl From<RecipeDto> for Recipe {
    fn from(dto: RecipeDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            headline: dto.headline,
            time: dto.time,
            difficulty: dto.difficulty,
            calories: dto.calories,
            carbos: dto.carbos,
            fats: dto.fats,
            proteins: dto.proteins,
            image: dto.image,
            thumb: dto.thumb,
        }
    }
}

impl From<Recipe> for RecipeDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            description: recipe.description,
            headline: recipe.headline,
            time: recipe.time,
            difficulty: recipe.difficulty,
            calories: recipe.calories,
            carbos: recipe.carbos,
            fats: recipe.fats,
            proteins: recipe.proteins,
            image: recipe.image,
            thumb: recipe.thumb,
        }
    }
}
