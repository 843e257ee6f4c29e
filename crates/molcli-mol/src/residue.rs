//! Residue and atom name tables
//!
//! Fixed vocabularies offered when completing `:residue` and `@atom` parts of
//! an object specifier.

use phf::phf_map;

/// The 20 standard amino acids in display order (three-letter, title case)
pub static AMINO_ACIDS: [&str; 20] = [
    "Ala", "Arg", "Asn", "Asp", "Cys", "Gln", "Glu", "Gly", "His", "Ile",
    "Leu", "Lys", "Met", "Phe", "Pro", "Ser", "Thr", "Trp", "Tyr", "Val",
];

/// Atom names offered for `@` completion
pub static ATOM_NAMES: [&str; 6] = ["Ca", "Cb", "C", "N", "O", "OH"];

static ONE_TO_THREE: phf::Map<char, &'static str> = phf_map! {
    'A' => "Ala", 'R' => "Arg", 'N' => "Asn", 'D' => "Asp", 'C' => "Cys",
    'Q' => "Gln", 'E' => "Glu", 'G' => "Gly", 'H' => "His", 'I' => "Ile",
    'L' => "Leu", 'K' => "Lys", 'M' => "Met", 'F' => "Phe", 'P' => "Pro",
    'S' => "Ser", 'T' => "Thr", 'W' => "Trp", 'Y' => "Tyr", 'V' => "Val",
};

// (full name, one-letter code)
static FULL_NAMES: phf::Map<&'static str, (&'static str, char)> = phf_map! {
    "Ala" => ("Alanine", 'A'),
    "Arg" => ("Arginine", 'R'),
    "Asn" => ("Asparagine", 'N'),
    "Asp" => ("Aspartic acid", 'D'),
    "Cys" => ("Cysteine", 'C'),
    "Gln" => ("Glutamine", 'Q'),
    "Glu" => ("Glutamic acid", 'E'),
    "Gly" => ("Glycine", 'G'),
    "His" => ("Histidine", 'H'),
    "Ile" => ("Isoleucine", 'I'),
    "Leu" => ("Leucine", 'L'),
    "Lys" => ("Lysine", 'K'),
    "Met" => ("Methionine", 'M'),
    "Phe" => ("Phenylalanine", 'F'),
    "Pro" => ("Proline", 'P'),
    "Ser" => ("Serine", 'S'),
    "Thr" => ("Threonine", 'T'),
    "Trp" => ("Tryptophan", 'W'),
    "Tyr" => ("Tyrosine", 'Y'),
    "Val" => ("Valine", 'V'),
};

/// Three-letter name for a one-letter amino acid code
pub fn one_to_three(code: char) -> Option<&'static str> {
    ONE_TO_THREE.get(&code.to_ascii_uppercase()).copied()
}

/// Human readable label such as `Alanine (A)`
pub fn amino_acid_label(three_letter: &str) -> Option<String> {
    FULL_NAMES
        .get(three_letter)
        .map(|(name, code)| format!("{} ({})", name, code))
}

/// Title-case a residue name: `ALA` -> `Ala`
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_consistent() {
        for aa in AMINO_ACIDS.iter() {
            assert!(amino_acid_label(aa).is_some(), "missing label for {}", aa);
        }
        for (code, three) in ONE_TO_THREE.entries() {
            let (_, back) = FULL_NAMES.get(three).unwrap();
            assert_eq!(back, code);
        }
    }

    #[test]
    fn test_one_to_three() {
        assert_eq!(one_to_three('W'), Some("Trp"));
        assert_eq!(one_to_three('w'), Some("Trp"));
        assert_eq!(one_to_three('X'), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(amino_acid_label("Ala").as_deref(), Some("Alanine (A)"));
        assert_eq!(amino_acid_label("Asp").as_deref(), Some("Aspartic acid (D)"));
        assert_eq!(amino_acid_label("ATP"), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ALA"), "Ala");
        assert_eq!(title_case("gly"), "Gly");
        assert_eq!(title_case(""), "");
    }
}
