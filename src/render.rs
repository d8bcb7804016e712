use crate::capabilities::{Haptics, Narrator};
use crate::controller::RecipeCard;
use crate::scaling::scaled_quantity;
use crate::store::SnapshotStore;

/// Everything a host needs to paint the card, derived in one pure pass.
/// Keeping derivation out of the state machine lets the session logic run
/// under test without any rendering environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub title: String,
    pub steps: Vec<StepRow>,
    pub ingredients: Vec<IngredientRow>,
    pub progress_percent: u32,
    pub timer_display: String,
    pub begin_enabled: bool,
    pub next_enabled: bool,
    pub reset_enabled: bool,
    pub ingredients_hidden: bool,
    pub steps_hidden: bool,
    pub tts_enabled: bool,
    pub servings: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    pub text: String,
    pub checked: bool,
    pub active: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub name: String,
    /// Already scaled for the current target servings.
    pub display_quantity: String,
    pub unit: String,
}

impl RenderModel {
    pub fn project<S, N, H>(card: &RecipeCard<S, N, H>) -> Self
    where
        S: SnapshotStore,
        N: Narrator,
        H: Haptics,
    {
        let recipe = card.recipe();
        let session = card.session();
        let steps = recipe
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| StepRow {
                text: step.text.clone(),
                checked: session.checks().get(index).copied().unwrap_or(false),
                active: session.is_active(index),
                completed: session.is_completed(index),
            })
            .collect();
        let ingredients = recipe
            .ingredients
            .iter()
            .map(|ingredient| IngredientRow {
                name: ingredient.name.clone(),
                display_quantity: scaled_quantity(
                    ingredient.base_quantity,
                    card.target_servings(),
                    recipe.base_servings,
                ),
                unit: ingredient.unit.clone(),
            })
            .collect();

        Self {
            title: recipe.title.clone(),
            steps,
            ingredients,
            progress_percent: session.progress_percent(),
            timer_display: card.timer_display().to_string(),
            begin_enabled: session.begin_enabled(),
            next_enabled: session.next_enabled(),
            reset_enabled: session.reset_enabled(),
            ingredients_hidden: card.ingredients_hidden(),
            steps_hidden: card.steps_hidden(),
            tts_enabled: card.tts_enabled(),
            servings: card.target_servings(),
        }
    }
}
