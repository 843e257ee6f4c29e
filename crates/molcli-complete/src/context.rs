//! Host state seen by the completion engine
//!
//! A [`Context`] is a read-only snapshot of what the host application knows:
//! loaded models, named selectors, colors, the command registry and a few
//! capability functions. Narrowing to a subset of models produces a new
//! context and leaves the original untouched.

use std::fmt;
use std::sync::Arc;

use molcli_cmd::{ArgType, CommandRegistry};
use molcli_color::NamedColors;
use molcli_mol::{FileSpec, Model};

use crate::action::{FileMode, PickHistory};
use crate::config::CompletionConfig;

/// Narrows a model list, e.g. to volumes or surfaces
pub type ModelFilter = Arc<dyn Fn(&[Arc<Model>]) -> Vec<Arc<Model>> + Send + Sync>;
/// Picks the file dialog mode for a path argument
pub type FileModeFn = Arc<dyn Fn(&ArgType) -> FileMode + Send + Sync>;
/// Lists recently opened files
pub type FileListFn = Arc<dyn Fn() -> Vec<FileSpec> + Send + Sync>;
/// Executes a command line in the host
pub type CommandRunner = Arc<dyn Fn(&str) + Send + Sync>;

/// Which models an object specifier may address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityFilter {
    /// Any model
    #[default]
    All,
    /// Volume models only
    Volumes,
    /// Surface models only
    Surfaces,
}

/// Read-only view of host state for one completion request
#[derive(Clone)]
pub struct Context {
    models: Vec<Arc<Model>>,
    selectors: Vec<String>,
    colors: Arc<NamedColors>,
    registry: Arc<CommandRegistry>,
    config: CompletionConfig,
    pick_history: PickHistory,
    filter_volume: ModelFilter,
    filter_surface: ModelFilter,
    file_open_mode: FileModeFn,
    file_list: FileListFn,
    run_command: CommandRunner,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context with no models, default colors and an empty registry
    pub fn new() -> Self {
        let config = CompletionConfig::default();
        Context {
            models: Vec::new(),
            selectors: Vec::new(),
            colors: Arc::new(NamedColors::new()),
            registry: Arc::new(CommandRegistry::new()),
            pick_history: config.pick_history(),
            config,
            filter_volume: Arc::new(|models: &[Arc<Model>]| models.to_vec()),
            filter_surface: Arc::new(|models: &[Arc<Model>]| models.to_vec()),
            file_open_mode: Arc::new(default_file_open_mode),
            file_list: Arc::new(Vec::new),
            run_command: Arc::new(|line: &str| log::debug!("No command runner for '{}'", line)),
        }
    }

    /// Copy of this context addressing only `models`
    pub fn with_models(&self, models: Vec<Arc<Model>>) -> Context {
        Context {
            models,
            ..self.clone()
        }
    }

    /// Add a model
    pub fn with_model(mut self, model: Model) -> Self {
        self.models.push(Arc::new(model));
        self
    }

    /// Set the active named selectors
    pub fn with_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the named colors
    pub fn with_colors(mut self, colors: Arc<NamedColors>) -> Self {
        self.colors = colors;
        self
    }

    /// Set the command registry
    pub fn with_registry(mut self, registry: Arc<CommandRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Set the completion limits
    pub fn with_config(mut self, config: CompletionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the picked color and path history offered for empty values
    pub fn with_pick_history(mut self, history: PickHistory) -> Self {
        self.pick_history = history;
        self
    }

    /// Set the volume filter
    pub fn with_volume_filter<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Arc<Model>]) -> Vec<Arc<Model>> + Send + Sync + 'static,
    {
        self.filter_volume = Arc::new(f);
        self
    }

    /// Set the surface filter
    pub fn with_surface_filter<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Arc<Model>]) -> Vec<Arc<Model>> + Send + Sync + 'static,
    {
        self.filter_surface = Arc::new(f);
        self
    }

    /// Set how file dialog modes are chosen
    pub fn with_file_open_mode<F>(mut self, f: F) -> Self
    where
        F: Fn(&ArgType) -> FileMode + Send + Sync + 'static,
    {
        self.file_open_mode = Arc::new(f);
        self
    }

    /// Set the recent file source
    pub fn with_file_list<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Vec<FileSpec> + Send + Sync + 'static,
    {
        self.file_list = Arc::new(f);
        self
    }

    /// Set the command runner
    pub fn with_run_command<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.run_command = Arc::new(f);
        self
    }

    /// Addressable models
    pub fn models(&self) -> &[Arc<Model>] {
        &self.models
    }

    /// Models allowed by `filter`
    pub fn models_for(&self, filter: EntityFilter) -> Vec<Arc<Model>> {
        match filter {
            EntityFilter::All => self.models.clone(),
            EntityFilter::Volumes => (self.filter_volume)(&self.models),
            EntityFilter::Surfaces => (self.filter_surface)(&self.models),
        }
    }

    /// Named selectors
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Named colors
    pub fn colors(&self) -> &NamedColors {
        &self.colors
    }

    /// Command registry
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Completion limits
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Picked color and path history
    pub fn pick_history(&self) -> &PickHistory {
        &self.pick_history
    }

    /// File dialog mode for a path argument
    pub fn file_open_mode(&self, arg: &ArgType) -> FileMode {
        (self.file_open_mode)(arg)
    }

    /// Recently opened files
    pub fn file_list(&self) -> Vec<FileSpec> {
        (self.file_list)()
    }

    /// Execute a command line in the host
    pub fn run_command(&self, line: &str) {
        (self.run_command)(line)
    }
}

fn default_file_open_mode(arg: &ArgType) -> FileMode {
    match arg {
        ArgType::FilePath(kind) => FileMode::from(*kind),
        _ => FileMode::Read,
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("models", &self.models.len())
            .field("selectors", &self.selectors)
            .field("colors", &self.colors.len())
            .field("commands", &self.registry.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molcli_cmd::PathKind;
    use molcli_mol::ModelId;

    fn context() -> Context {
        Context::new()
            .with_model(Model::new(ModelId::new(&[1]), "protein"))
            .with_model(Model::new(ModelId::new(&[2]), "map"))
            .with_volume_filter(|models| {
                models.iter().filter(|m| m.name == "map").cloned().collect()
            })
    }

    #[test]
    fn test_with_models_is_a_copy() {
        let ctx = context();
        let narrowed = ctx.with_models(ctx.models()[..1].to_vec());
        assert_eq!(narrowed.models().len(), 1);
        assert_eq!(ctx.models().len(), 2);
        assert_eq!(narrowed.models_for(EntityFilter::Volumes).len(), 0);
    }

    #[test]
    fn test_models_for() {
        let ctx = context();
        assert_eq!(ctx.models_for(EntityFilter::All).len(), 2);
        let volumes = ctx.models_for(EntityFilter::Volumes);
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].name, "map");
        assert_eq!(ctx.models_for(EntityFilter::Surfaces).len(), 2);
    }

    #[test]
    fn test_default_file_open_mode() {
        let ctx = Context::new();
        assert_eq!(ctx.file_open_mode(&ArgType::FilePath(PathKind::Save)), FileMode::Write);
        assert_eq!(ctx.file_open_mode(&ArgType::Text), FileMode::Read);
        assert!(ctx.file_list().is_empty());
    }
}
