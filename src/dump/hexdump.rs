// ClipDump - Rendu hex dump
//
// Format d'une ligne :
// ```text
// 00000000: 48 69 21                                           Hi!
// ^offset   ^16 paires hex, colonne de 49 caracteres               ^gouttiere ASCII
// ```
//
// - offset sur 8 chiffres hexadecimaux minuscules, suivi de `: `
// - octets en paires minuscules separees par un espace, colonne completee
//   par des espaces a 49 caracteres pour que la gouttiere reste alignee.
//   Une ligne pleine (47 caracteres de paires) a donc 4 espaces avant la
//   gouttiere, une ligne partielle en a davantage ; c'est voulu.
// - deux espaces, puis la gouttiere : 0x20..=0x7E rendus tels quels,
//   tout autre octet rendu par `.`
// - chaque ligne se termine par `\n` ; une entree vide donne une sortie vide

use std::fmt::Write;

use crate::constants::{HEX_BYTES_PER_ROW, HEX_COLUMN_WIDTH};

/// Rendu d'un octet dans la gouttiere ASCII.
pub fn gutter_char(b: u8) -> char {
    if (0x20..=0x7E).contains(&b) {
        b as char
    } else {
        '.'
    }
}

/// Produit le hex dump complet d'un bloc d'octets.
pub fn hex_dump(data: &[u8]) -> String {
    let rows = data.len().div_ceil(HEX_BYTES_PER_ROW);
    // offset(10) + colonne hex + separateur(2) + gouttiere + \n
    let mut out = String::with_capacity(rows * (10 + HEX_COLUMN_WIDTH + 2 + HEX_BYTES_PER_ROW + 1));

    for (row, chunk) in data.chunks(HEX_BYTES_PER_ROW).enumerate() {
        let hex = chunk
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");
        let gutter: String = chunk.iter().map(|&b| gutter_char(b)).collect();
        // L'ecriture dans une String ne peut pas echouer
        let _ = writeln!(
            out,
            "{:08x}: {:<width$}  {}",
            row * HEX_BYTES_PER_ROW,
            hex,
            gutter,
            width = HEX_COLUMN_WIDTH
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Relit les colonnes offset + hex d'un dump (verification uniquement).
    fn decode(dump: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for (row, line) in dump.lines().enumerate() {
            let (offset, rest) = line.split_once(": ").unwrap();
            assert_eq!(usize::from_str_radix(offset, 16).unwrap(), row * HEX_BYTES_PER_ROW);
            let hex = &rest[..HEX_COLUMN_WIDTH];
            for pair in hex.split_whitespace() {
                out.push(u8::from_str_radix(pair, 16).unwrap());
            }
        }
        out
    }

    #[test]
    fn test_hi_example() {
        let dump = hex_dump(b"Hi!");
        let expected = format!("00000000: 48 69 21{}  Hi!\n", " ".repeat(HEX_COLUMN_WIDTH - 8));
        assert_eq!(dump, expected);
        assert_eq!(
            dump,
            "00000000: 48 69 21                                           Hi!\n"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(hex_dump(&[]), "");
    }

    #[test]
    fn test_full_row_and_offsets() {
        let data: Vec<u8> = (0u8..40).collect();
        let dump = hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("00000000: 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f  "));
        assert!(lines[1].starts_with("00000010: 10 11"));
        assert!(lines[2].starts_with("00000020: 20 21 22 23 24 25 26 27 "));
        assert!(lines[2].ends_with("  !\"#$%&'"));
    }

    #[test]
    fn test_full_row_gap() {
        let dump = hex_dump(&[b'A'; 16]);
        let expected = format!("00000000: {}    {}\n", ["41"; 16].join(" "), "A".repeat(16));
        assert_eq!(dump, expected);
    }

    #[test]
    fn test_gutter_alignment() {
        let data: Vec<u8> = (0u8..=255).chain(0u8..5).collect();
        let dump = hex_dump(&data);
        for line in dump.lines() {
            // La gouttiere commence toujours a la meme colonne
            assert_eq!(&line[10 + HEX_COLUMN_WIDTH..10 + HEX_COLUMN_WIDTH + 2], "  ");
        }
    }

    #[test]
    fn test_gutter_rule() {
        assert_eq!(gutter_char(0x1F), '.');
        assert_eq!(gutter_char(0x20), ' ');
        assert_eq!(gutter_char(b'A'), 'A');
        assert_eq!(gutter_char(0x7E), '~');
        assert_eq!(gutter_char(0x7F), '.');
        assert_eq!(gutter_char(0xFF), '.');

        let dump = hex_dump(&[0x00, 0x41, 0x7F, 0x20, 0xE9]);
        assert!(dump.ends_with("  .A. .\n"));
    }

    #[test]
    fn test_decode_reproduces_input() {
        let inputs: Vec<Vec<u8>> = vec![
            b"Hi!".to_vec(),
            (0u8..=255).collect(),
            vec![0xFF; 33],
            "Bonjour le monde\r\n\0".as_bytes().to_vec(),
        ];
        for input in inputs {
            assert_eq!(decode(&hex_dump(&input)), input);
        }
    }

    #[test]
    fn test_lowercase_hex() {
        let dump = hex_dump(&[0xAB, 0xCD]);
        assert!(dump.starts_with("00000000: ab cd"));
    }
}
