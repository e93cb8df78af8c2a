//! # Colores por Proceso
//! src/render/color.rs
//!
//! Asigna a cada pid un color `#rrggbb` determinista: los tres primeros
//! bytes de SHA-256(seed || pid). Es una función pura, sin estado global;
//! cambiar la semilla cambia toda la paleta.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Color de una unidad ociosa
pub const IDLE_COLOR: &str = "#cccccc";

/// Color de un pid para una semilla dada
pub fn color_for(pid: &str, seed: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(pid.as_bytes());
    let digest = hasher.finalize();

    format!("#{:02x}{:02x}{:02x}", digest[0], digest[1], digest[2])
}

/// Paleta pid -> color para un conjunto de pids
pub fn palette<'a, I>(pids: I, seed: u64) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    pids.into_iter()
        .map(|pid| (pid.to_string(), color_for(pid, seed)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_color_format() {
        assert!(is_hex_color(&color_for("A", 0)));
        assert!(is_hex_color(IDLE_COLOR));
    }

    #[test]
    fn test_color_is_deterministic() {
        assert_eq!(color_for("A", 42), color_for("A", 42));
    }

    #[test]
    fn test_color_depends_on_seed_and_pid() {
        assert_ne!(color_for("A", 1), color_for("A", 2));
        assert_ne!(color_for("A", 1), color_for("B", 1));
    }

    #[test]
    fn test_palette() {
        let colors = palette(["A", "B", "A"], 7);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors["B"], color_for("B", 7));
    }
}
