//! Named color registry

use ahash::AHashMap;

use crate::error::{ColorError, ColorResult};
use crate::Color;

/// Registry of named colors, kept in registration order
#[derive(Debug, Clone)]
pub struct NamedColors {
    entries: Vec<(String, Color)>,
    by_name: AHashMap<String, usize>,
}

impl NamedColors {
    /// Create a registry holding the built-in palette
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_defaults();
        registry
    }

    /// Create a registry with no colors
    pub fn empty() -> Self {
        NamedColors {
            entries: Vec::new(),
            by_name: AHashMap::new(),
        }
    }

    /// Build a registry from `(name, hex)` pairs supplied by the host
    pub fn from_hex_pairs<'a, I>(pairs: I) -> ColorResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut registry = Self::empty();
        for (name, hex) in pairs {
            let color = Color::from_hex(hex)
                .ok_or_else(|| ColorError::InvalidValue(format!("{}: {}", name, hex)))?;
            registry.register(name, color);
        }
        Ok(registry)
    }

    fn register_defaults(&mut self) {
        // Basic colors
        self.register("white", Color::WHITE);
        self.register("black", Color::BLACK);
        self.register("red", Color::RED);
        self.register("green", Color::new(0.0, 0.5, 0.0));
        self.register("lime", Color::GREEN);
        self.register("blue", Color::BLUE);
        self.register("yellow", Color::YELLOW);
        self.register("cyan", Color::CYAN);
        self.register("magenta", Color::MAGENTA);

        // Grays
        self.register("gray", Color::new(0.5, 0.5, 0.5));
        self.register("lightgray", Color::new(0.827, 0.827, 0.827));
        self.register("dimgray", Color::new(0.412, 0.412, 0.412));

        // Warm
        self.register("orange", Color::new(1.0, 0.647, 0.0));
        self.register("orangered", Color::new(1.0, 0.271, 0.0));
        self.register("salmon", Color::new(0.98, 0.502, 0.447));
        self.register("pink", Color::new(1.0, 0.753, 0.796));
        self.register("hotpink", Color::new(1.0, 0.412, 0.706));
        self.register("gold", Color::new(1.0, 0.843, 0.0));
        self.register("tan", Color::new(0.824, 0.706, 0.549));
        self.register("brown", Color::new(0.647, 0.165, 0.165));
        self.register("maroon", Color::new(0.502, 0.0, 0.0));

        // Cool
        self.register("navy", Color::new(0.0, 0.0, 0.502));
        self.register("skyblue", Color::new(0.529, 0.808, 0.922));
        self.register("cornflowerblue", Color::new(0.392, 0.584, 0.929));
        self.register("teal", Color::new(0.0, 0.502, 0.502));
        self.register("forestgreen", Color::new(0.133, 0.545, 0.133));
        self.register("purple", Color::new(0.502, 0.0, 0.502));
        self.register("violet", Color::new(0.933, 0.51, 0.933));
        self.register("plum", Color::new(0.867, 0.627, 0.867));
    }

    /// Register a color; re-registering a name replaces its value
    pub fn register(&mut self, name: &str, color: Color) {
        let key = name.to_lowercase();
        match self.by_name.get(&key) {
            Some(&idx) => self.entries[idx].1 = color,
            None => {
                self.by_name.insert(key.clone(), self.entries.len());
                self.entries.push((key, color));
            }
        }
    }

    /// Get a color by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Color> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| self.entries[idx].1)
    }

    /// Hex value of a named color
    pub fn hex(&self, name: &str) -> Option<String> {
        self.get(name).map(|c| c.to_hex())
    }

    /// Get the number of registered colors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all colors in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// Colors whose name starts with `prefix`, in registration order
    pub fn starting_with<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, Color)> + 'a {
        self.iter().filter(move |(name, _)| name.starts_with(prefix))
    }
}

impl Default for NamedColors {
    fn default() -> Self {
        Self::new()
    }
}
