use super::{Category, Transform, TransformResult};
use crate::debug;
use crate::error::Error;
use crate::params::Params;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// A registered transform along with the metadata used for listings
#[derive(Clone)]
pub struct Entry {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    transform: Arc<Box<dyn Transform>>,
}

impl Entry {
    pub fn transform(&self) -> &dyn Transform {
        &**self.transform
    }
}

#[derive(Default)]
pub struct TransformRegistry {
    transforms: HashMap<&'static str, Entry>,
    order: Vec<&'static str>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Initializes the transform registry with every built-in transform,
    /// category after category.
    pub fn init(&mut self) {
        super::cipher::register(self);
        super::encoding::register(self);
        super::whitespace::register(self);
        super::case::register(self);
        super::characters::register(self);
        super::lines::register(self);
        super::extract::register(self);
        super::json::register(self);
        super::random::register(self);
    }

    /// Registers a transform under the given name.
    /// Registering an existing name replaces the previous transform but keeps its position.
    pub fn register<T: Transform + 'static>(
        &mut self,
        name: &'static str,
        category: Category,
        summary: &'static str,
        transform: T,
    ) {
        let entry = Entry {
            name,
            category,
            summary,
            transform: Arc::new(Box::new(transform) as Box<dyn Transform>),
        };
        if self.transforms.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.transforms.get(name)
    }

    /// Returns the registered entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.order.iter().filter_map(|name| self.transforms.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Applies a single transform by name
    ///
    /// # Arguments
    /// * `name` - The registered name of the transform
    /// * `text` - The text to transform
    /// * `params` - The invocation parameters
    ///
    /// # Returns
    /// The transformed text, or `UnknownTransform` if no transform has that name
    pub fn apply(&self, name: &str, text: &str, params: &Params) -> TransformResult {
        let entry = self
            .get(name)
            .ok_or_else(|| Error::UnknownTransform(name.to_string()))?;
        debug!("Applying \"{}\" to {} bytes", name, text.len());
        entry.transform().transform(text, params)
    }

    /// Process the text through the named transforms in sequence
    ///
    /// # Arguments
    /// * `names` - The transforms to apply, left to right
    /// * `text` - The text to process
    /// * `params` - The parameters shared by every transform in the chain
    ///
    /// # Returns
    /// The processed text after applying all transforms or the first error found
    pub fn process<S: AsRef<str>>(&self, names: &[S], text: &str, params: &Params) -> TransformResult {
        names
            .iter()
            .try_fold(text.to_string(), |acc, name| self.apply(name.as_ref(), &acc, params))
    }
}

/// Global transform manager holding the registry of every built-in transform
pub struct TransformManager {
    registry: TransformRegistry,
}

impl TransformManager {
    /// Gets a reference to the global transform manager
    pub fn get() -> &'static TransformManager {
        static INSTANCE: Lazy<TransformManager> = Lazy::new(|| {
            let mut registry = TransformRegistry::new();
            registry.init();
            TransformManager { registry }
        });
        &INSTANCE
    }

    pub fn registry(&self) -> &TransformRegistry {
        &self.registry
    }

    /// Applies a single transform by name
    pub fn apply(&self, name: &str, text: &str, params: &Params) -> TransformResult {
        self.registry.apply(name, text, params)
    }

    /// Process the text through the named transforms in sequence
    pub fn process<S: AsRef<str>>(&self, names: &[S], text: &str, params: &Params) -> TransformResult {
        self.registry.process(names, text, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_register_keeps_order() {
        let mut registry = TransformRegistry::new();
        registry.register("b", Category::Case, "B", |t: &str, _: &Params| -> TransformResult {
            Ok(t.to_string())
        });
        registry.register("a", Category::Case, "A", |t: &str, _: &Params| -> TransformResult {
            Ok(t.to_string())
        });
        registry.register("b", Category::Case, "B2", |t: &str, _: &Params| -> TransformResult {
            Ok(t.to_uppercase())
        });

        let names: Vec<_> = registry.entries().map(|e| e.name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(registry.get("b").unwrap().summary, "B2");
        assert_eq!(registry.apply("b", "x", &Params::new()).unwrap(), "X");
    }

    #[test]
    fn test_unknown_transform() {
        let registry = TransformRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.apply("missing", "x", &Params::new()),
            Err(Error::UnknownTransform(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_process_chain() {
        let manager = TransformManager::get();
        let params = Params::new();
        let encoded = manager
            .process(&["rot13", "base64-encode"], "hello", &params)
            .unwrap();
        assert_eq!(encoded, "dXJ5eWI=");
        let decoded = manager
            .process(&["base64-decode", "rot13"], &encoded, &params)
            .unwrap();
        assert_eq!(decoded, "hello");
    }

    #[test]
    fn test_process_stops_at_first_failure() {
        let manager = TransformManager::get();
        let result = manager.process(&["base64-decode", "uppercase"], "not-valid-base64!!", &Params::new());
        assert!(matches!(result, Err(Error::MalformedInput { .. })));
    }

    #[test]
    fn test_default_registry_is_complete() {
        let registry = TransformManager::get().registry();
        let names: HashSet<_> = registry.entries().map(|e| e.name).collect();
        assert_eq!(names.len(), registry.len());
        for name in [
            "rot13",
            "rot47",
            "base64-encode",
            "base64-decode",
            "text-to-hex",
            "hex-to-text",
            "text-to-octal",
            "octal-to-text",
            "remove-extra-spaces",
            "newline-to-comma",
            "remove-diacritics",
            "rotate-text",
            "json-format",
            "insert-curse-words",
        ] {
            assert!(names.contains(name), "missing transform {}", name);
        }
        for category in Category::ALL {
            assert!(
                registry.entries().any(|e| e.category == category),
                "no transform in {}",
                category
            );
        }
    }
}
