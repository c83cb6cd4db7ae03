use entropass::{ChaChaSource, Error, PasswordAssembler, SCHEMES, WordFile, generate, lookup};
use std::io::Write;
use tempfile::NamedTempFile;

const DICEWARE: &str = "\
11111\tabacus
11112\tabdomen
11113\tabide
11114\tacorn
11115\tbalance
11116\tlife
11121\tzoom
11122\tabacus
";

fn wordlist() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DICEWARE.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_word_schemes_from_file() {
    let file = wordlist();
    let words = WordFile::new(file.path());
    let mut rng = ChaChaSource::from_os().unwrap();

    for scheme in SCHEMES.iter().filter(|scheme| scheme.uses_words()) {
        let password = generate(scheme.name, 40.0, &words, &mut rng).unwrap();
        assert!(password.bits >= 40.0, "{} undershot", scheme.name);
        assert_eq!(password.length, password.text.chars().count());
    }
}

#[test]
fn test_duplicate_words_collapse() {
    let file = wordlist();
    let words = WordFile::new(file.path());

    // Seven distinct words after dropping the repeated "abacus".
    let scheme = lookup("words").unwrap().build(&words).unwrap();
    assert!((scheme.generator.entropy() - 7f64.log2()).abs() < 1e-12);
}

#[test]
fn test_words_output_uses_list() {
    let file = wordlist();
    let words = WordFile::new(file.path());
    let mut rng = ChaChaSource::from_key(&[21u8; 32]);

    let password = generate("words", 30.0, &words, &mut rng).unwrap();
    for word in password.text.split(' ') {
        assert!(DICEWARE.contains(&format!("\t{}\n", word)), "unexpected {:?}", word);
    }
}

#[test]
fn test_keyed_generation_reproducible() {
    let first = generate("ascii", 64.0, &["unused"], &mut ChaChaSource::from_key(&[5u8; 32])).unwrap();
    let second = generate("ascii", 64.0, &["unused"], &mut ChaChaSource::from_key(&[5u8; 32])).unwrap();
    assert_eq!(*first.text, *second.text);
    assert_eq!(first.length, 10);
}

#[test]
fn test_missing_wordlist_only_matters_for_words() {
    let words = WordFile::new("/nonexistent/entropass/words");
    let mut rng = ChaChaSource::from_key(&[0u8; 32]);

    assert!(generate("hex", 32.0, &words, &mut rng).is_ok());

    let err = generate("words", 32.0, &words, &mut rng).unwrap_err();
    assert!(matches!(err, Error::WordList { .. }));
    assert!(err.is_configuration());
}

#[test]
fn test_assembler_reusable() {
    let scheme = lookup("pin").unwrap().build(&["unused"]).unwrap();
    let assembler = PasswordAssembler::new(scheme, 20.0).unwrap();
    let mut rng = ChaChaSource::from_key(&[9u8; 32]);

    for _ in 0..10 {
        let password = assembler.run(&mut rng);
        assert_eq!(password.length, 7);
        assert!(password.text.chars().all(|c| c.is_ascii_digit()));
    }
}
