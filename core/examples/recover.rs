use recovery_core::{SecretRecovery, Share, ShareDocument, ShareSet};

const DOCUMENT: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "6" },
    "2": { "base": "2", "value": "1011" },
    "3": { "base": "16", "value": "12" },
    "4": { "base": "36", "value": "10" }
}"#;

/// Recover f(x) = x^2 + 2x + 3 from a document and from in-memory shares.
/// The document's fourth share decodes to 36 rather than 27, so it is
/// reported as incorrect.
fn main() {
    let doc: ShareDocument = DOCUMENT.parse().expect("document should parse");
    let recovery = doc.recover().expect("recovery should succeed");
    println!("{recovery}");
    assert_eq!(recovery.bad_shares.len(), 1);

    let shares = ShareSet::new(vec![
        Share::new(1, 6),
        Share::new(2, 11),
        Share::new(3, 18),
        Share::new(4, 27),
    ])
    .expect("distinct x-coordinates");
    let outcome = SecretRecovery::new(3, shares.len())
        .and_then(|recovery| recovery.recover(&shares))
        .expect("recovery should succeed");

    assert_eq!(outcome.secret, recovery.secret);
    assert!(outcome.is_consistent());
    println!("In-memory shares agree: secret {}", outcome.secret);
}
