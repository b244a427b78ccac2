//! One scene tick
//!
//! Order within a tick: unify virtual keys, react to them, clear the
//! surface, then run one full pass over the entity list. Every read of
//! virtual key state in a tick sees the same frame.

use super::spawner::BookSpawner;
use super::state::Stage;
use super::titles::default_titles;
use crate::entity::{EntityList, PassSummary};
use crate::input::{InputEvent, VKey, VirtualKeyInput};
use crate::render::Surface;
use crate::settings::Settings;

/// The running scene: input, entities and their shared context
pub struct Game<S: Surface + 'static> {
    input: VirtualKeyInput,
    entities: EntityList<Stage<S>>,
    stage: Stage<S>,
    last_pass: PassSummary,
}

impl<S: Surface + 'static> Game<S> {
    /// New scene with the built-in titles
    pub fn new(surface: S, settings: Settings, seed: u64) -> Self {
        Self::with_titles(surface, settings, seed, default_titles())
    }

    pub fn with_titles(surface: S, settings: Settings, seed: u64, titles: Vec<String>) -> Self {
        let mut input = VirtualKeyInput::new();
        input.configure_one_key();

        let mut entities = EntityList::new();
        entities.append(BookSpawner::new());

        log::info!("Scene ready: {} titles, seed {seed}", titles.len());
        Self {
            input,
            entities,
            stage: Stage::new(surface, settings, seed, titles),
            last_pass: PassSummary::default(),
        }
    }

    /// Advance the scene by one tick
    pub fn tick(&mut self) -> anyhow::Result<()> {
        self.input.update();

        if self.input.is_just_pressed(VKey::SPACE)? {
            self.stage.theme = self.stage.theme.inverted();
            log::debug!("Theme switched to {}", self.stage.theme.as_str());
        }

        let background = self.stage.theme.background_color();
        self.stage.surface.clear(background);

        self.last_pass = self.entities.traverse(&mut self.stage)?;
        Ok(())
    }

    /// Route a raw input event. Returns true if it was consumed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        self.input.handle_event(event)
    }

    /// Stop listening to input (idempotent)
    pub fn detach_input(&mut self) {
        self.input.detach();
    }

    pub fn input(&self) -> &VirtualKeyInput {
        &self.input
    }

    pub fn stage(&self) -> &Stage<S> {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage<S> {
        &mut self.stage
    }

    /// Live entities, including the spawner
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn last_pass(&self) -> PassSummary {
        self.last_pass
    }
}
