/// Process-wide engine cache, one engine per language identifier.
///
/// Engines are immutable after construction and construction is pure, so
/// two requests racing on first use may both build one; whichever loses the
/// insert is discarded. No lock is held during construction.
use std::sync::Arc;

use dashmap::DashMap;
use lazy_static::lazy_static;

use super::NormalizationEngine;
use crate::error::Result;

lazy_static! {
    static ref ENGINES: DashMap<String, Arc<NormalizationEngine>> = DashMap::new();
}

/// Fetch the cached engine for a language, constructing it on first use
pub fn engine_for(language: &str) -> Result<Arc<NormalizationEngine>> {
    if let Some(engine) = ENGINES.get(language) {
        return Ok(engine.clone());
    }

    let engine = Arc::new(NormalizationEngine::new(language)?);
    let entry = ENGINES
        .entry(language.to_string())
        .or_insert_with(|| engine);
    Ok(entry.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instance_returned() {
        let first = engine_for("hi-IN").unwrap();
        let second = engine_for("hi-IN").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unknown_language_not_cached() {
        assert!(engine_for("xx-YY").is_err());
        // A failed construction must not poison the cache
        assert!(engine_for("xx-YY").is_err());
        assert!(engine_for("hi-IN").is_ok());
    }

    #[test]
    fn test_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| engine_for("hi-IN").map(|e| e.language().to_string())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "hi-IN");
        }
    }
}
