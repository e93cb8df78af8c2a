//! # Etiquetas automáticas de procesos
//! src/process/label.rs
//!
//! Genera PIDs en base 26 biyectiva: A, B, ..., Z, AA, AB, ...

/// Retorna la etiqueta del proceso en la posición `index` (base 0)
pub fn process_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();

    while n > 0 {
        n -= 1;
        label.push(b'A' + (n % 26) as u8);
        n /= 26;
    }

    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        assert_eq!(process_label(0), "A");
        assert_eq!(process_label(1), "B");
        assert_eq!(process_label(25), "Z");
    }

    #[test]
    fn test_two_letters() {
        assert_eq!(process_label(26), "AA");
        assert_eq!(process_label(27), "AB");
        assert_eq!(process_label(51), "AZ");
        assert_eq!(process_label(52), "BA");
        assert_eq!(process_label(701), "ZZ");
    }

    #[test]
    fn test_three_letters() {
        assert_eq!(process_label(702), "AAA");
    }
}
