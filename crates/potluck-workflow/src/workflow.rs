//! Phase gating over the registry, vote box and ledger.
//!
//! A [`Workflow`] holds no per-participant state. Every call takes the
//! participant's [`WorkflowContext`], checks that the requested action
//! belongs to the context's phase, and then delegates to the component that
//! owns the data. Callers persist the context between invocations.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use potluck_core::dish::names_match;
use potluck_core::policy::{DuplicatePolicy, VotePolicy};
use potluck_core::validation;
use potluck_core::{DietaryType, Dish, IngredientEntry, Phase, ShoppingListLine};
use potluck_storage::Store;

use crate::error::{Result, StoreResultExt, WorkflowError};
use crate::ledger::IngredientLedger;
use crate::registry::DishRegistry;
use crate::votes::{VoteBox, VoteReceipt};

/// Per-participant session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowContext {
    pub participant: String,
    #[serde(default)]
    pub phase: Phase,
    /// Top dishes as of the last time the participant entered `select`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_selection: Option<Vec<String>>,
}

impl WorkflowContext {
    /// A fresh session at the first phase.
    pub fn new(participant: impl Into<String>) -> Self {
        Self {
            participant: participant.into(),
            phase: Phase::Submit,
            top_selection: None,
        }
    }

    /// Returns to the first phase and drops the cached selection.
    pub fn reset(&mut self) {
        self.phase = Phase::Submit;
        self.top_selection = None;
    }
}

/// Knobs shared by every participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSettings {
    pub top_k: usize,
    pub vote_policy: VotePolicy,
    pub duplicates: DuplicatePolicy,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            top_k: 6,
            vote_policy: VotePolicy::default(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

/// A phase-bound action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddDish,
    RemoveDish,
    Vote,
    ViewResults,
    AddIngredient,
    ViewShoppingList,
}

impl Action {
    /// The only phase in which the action may run.
    pub fn phase(&self) -> Phase {
        match self {
            Self::AddDish | Self::RemoveDish => Phase::Submit,
            Self::Vote => Phase::Vote,
            Self::ViewResults => Phase::Select,
            Self::AddIngredient => Phase::Ingredients,
            Self::ViewShoppingList => Phase::Shopping,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Self::AddDish => "add a dish",
            Self::RemoveDish => "remove a dish",
            Self::Vote => "vote",
            Self::ViewResults => "view results",
            Self::AddIngredient => "add an ingredient",
            Self::ViewShoppingList => "view the shopping list",
        }
    }
}

/// Ranked vote results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Every dish with at least one vote, highest first.
    pub ranking: Vec<(String, u32)>,
    /// The first `top_k` names of `ranking`.
    pub top: Vec<String>,
}

/// Entry point for every planner operation.
pub struct Workflow<'a> {
    store: &'a dyn Store,
    settings: WorkflowSettings,
}

impl<'a> Workflow<'a> {
    pub fn new(store: &'a dyn Store, settings: WorkflowSettings) -> Self {
        Self { store, settings }
    }

    pub fn registry(&self) -> DishRegistry<'a> {
        DishRegistry::new(self.store, self.settings.duplicates)
    }

    pub fn vote_box(&self) -> VoteBox<'a> {
        VoteBox::new(self.store, self.settings.vote_policy)
    }

    pub fn ledger(&self) -> IngredientLedger<'a> {
        IngredientLedger::new(self.store)
    }

    fn require(&self, ctx: &WorkflowContext, action: Action) -> Result<()> {
        let expected = action.phase();
        if ctx.phase != expected {
            return Err(WorkflowError::WrongPhase {
                action: action.verb(),
                expected,
                current: ctx.phase,
            });
        }
        Ok(())
    }

    // -- transitions --------------------------------------------------------

    /// Moves to the next phase. Entering `select` recomputes the top dishes.
    pub fn advance(&self, ctx: &mut WorkflowContext) -> Result<Phase> {
        let next = ctx
            .phase
            .next()
            .ok_or(WorkflowError::NoNextPhase { current: ctx.phase })?;
        self.enter(ctx, next)?;
        Ok(next)
    }

    /// Moves to the previous phase. Falling back before `select` drops the
    /// cached top dishes.
    pub fn retreat(&self, ctx: &mut WorkflowContext) -> Result<Phase> {
        let previous = ctx
            .phase
            .previous()
            .ok_or(WorkflowError::NoPreviousPhase { current: ctx.phase })?;
        self.enter(ctx, previous)?;
        Ok(previous)
    }

    fn enter(&self, ctx: &mut WorkflowContext, phase: Phase) -> Result<()> {
        match phase {
            Phase::Select => {
                ctx.top_selection = Some(self.vote_box().top_k(self.settings.top_k)?);
            }
            Phase::Submit | Phase::Vote => ctx.top_selection = None,
            Phase::Ingredients | Phase::Shopping => {}
        }
        debug!(participant = %ctx.participant, from = %ctx.phase, to = %phase, "phase transition");
        ctx.phase = phase;
        Ok(())
    }

    /// Clears every collection and returns the session to `submit`.
    ///
    /// Allowed in any phase. Other participants' sessions are left alone;
    /// they see the empty store on their next read.
    pub fn reset(&self, ctx: &mut WorkflowContext) -> Result<()> {
        self.store.reset().during("reset store")?;
        ctx.reset();
        info!(participant = %ctx.participant, "planner reset");
        Ok(())
    }

    // -- submit -------------------------------------------------------------

    pub fn add_dish(
        &self,
        ctx: &WorkflowContext,
        name: &str,
        dietary_type: DietaryType,
    ) -> Result<Option<Dish>> {
        self.require(ctx, Action::AddDish)?;
        self.registry().add(name, dietary_type)
    }

    pub fn remove_dish(&self, ctx: &WorkflowContext, name: &str) -> Result<usize> {
        self.require(ctx, Action::RemoveDish)?;
        self.registry().remove(name)
    }

    /// Every proposed dish. Allowed in any phase.
    pub fn dishes(&self) -> Result<Vec<Dish>> {
        self.registry().list()
    }

    // -- vote ---------------------------------------------------------------

    pub fn vote<S: AsRef<str>>(
        &self,
        ctx: &WorkflowContext,
        selected: &[S],
    ) -> Result<VoteReceipt> {
        self.require(ctx, Action::Vote)?;
        self.vote_box().submit(&ctx.participant, selected)
    }

    // -- select -------------------------------------------------------------

    /// The current ranking, refreshing the session's cached top dishes.
    pub fn results(&self, ctx: &mut WorkflowContext) -> Result<Selection> {
        self.require(ctx, Action::ViewResults)?;
        let ranking = self.vote_box().ranking()?;
        let top: Vec<String> = ranking
            .iter()
            .take(self.settings.top_k)
            .map(|(name, _)| name.clone())
            .collect();
        ctx.top_selection = Some(top.clone());
        Ok(Selection { ranking, top })
    }

    /// The cached top dishes, or a fresh computation when nothing is cached.
    pub fn selected_dishes(&self, ctx: &WorkflowContext) -> Result<Vec<String>> {
        match &ctx.top_selection {
            Some(top) => Ok(top.clone()),
            None => self.vote_box().top_k(self.settings.top_k),
        }
    }

    // -- ingredients --------------------------------------------------------

    /// Records an ingredient for one of the selected dishes, stored under the
    /// selection's spelling of the dish name.
    pub fn add_ingredient(
        &self,
        ctx: &WorkflowContext,
        dish: &str,
        name: &str,
        quantity: f64,
        unit: &str,
        recipe_url: Option<&str>,
    ) -> Result<Option<IngredientEntry>> {
        self.require(ctx, Action::AddIngredient)?;
        let Some(wanted) = validation::required(dish) else {
            return self.ledger().add(dish, name, quantity, unit, recipe_url);
        };
        let selected = self.selected_dishes(ctx)?;
        let dish = selected
            .iter()
            .find(|s| names_match(s, wanted))
            .ok_or_else(|| WorkflowError::DishNotSelected {
                dish: wanted.to_owned(),
            })?;
        self.ledger().add(dish, name, quantity, unit, recipe_url)
    }

    /// Every ingredient entry. Allowed in any phase.
    pub fn ingredients(&self) -> Result<Vec<IngredientEntry>> {
        self.ledger().list()
    }

    // -- shopping -----------------------------------------------------------

    pub fn shopping_list(&self, ctx: &WorkflowContext) -> Result<Vec<ShoppingListLine>> {
        self.require(ctx, Action::ViewShoppingList)?;
        self.ledger().shopping_list()
    }
}
