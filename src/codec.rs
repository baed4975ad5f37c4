//! Reversible, injective branch-name <-> path-safe-string codec.
//!
//! See `spec.md` §4.2. No teacher equivalent — worktrunk sanitizes branch
//! names lossily (`/` -> `-`) for display, which is exactly the collision the
//! spec calls out (`a-b` vs `a/b`). This is built fresh from the spec's own
//! three-step algorithm.
//!
//! ## Algorithm
//!
//! Encode (in order):
//! 1. Percent-encode every literal `-` as `%2D`, and every literal `%` as
//!    `%25`, in the same pass. Escaping `-` reserves `--` as the structural
//!    separator token before anything else touches the string: the spec's
//!    prose only calls out escaping doubled `--` pairs, but doing that alone
//!    leaves lone hyphens in the string, and a lone hyphen sitting right next
//!    to a `/` combines with that slash's step-3 substitution into a run of
//!    hyphens indistinguishable from two adjacent structural tokens
//!    (`encode("a-/-b")` and `encode("a//b")` would otherwise both be
//!    `"a----b"`, breaking injectivity). Escaping `%` in this same pass (and
//!    not folding it into step 2) matters for the opposite reason: step 1's
//!    own `-` -> `%2D` substitution *introduces* `%` characters, so escaping
//!    raw `%` has to happen on the original bytes before that substitution
//!    runs, or the escape marker would shadow itself. Escaping every hyphen
//!    and percent, not just the ones that already look structural, removes
//!    every raw occurrence of either before step 3 runs, so every `-` and `%`
//!    surviving into the final string came from this codec's own escaping
//!    and decoding is unambiguous.
//! 2. Percent-encode space, every `.`, and any control byte. Encoding every
//!    dot (not just the ones forming `..` or a leading `.`) is stricter than
//!    the spec's safety contract requires, but keeps step 2 a single linear
//!    pass with no lookahead, and percent-decoding reverses it exactly the
//!    same either way. This step never introduces a new `%`, so it can't
//!    collide with step 1's escaping.
//! 3. Replace `/` with `--`.
//!
//! Decode reverses these in the opposite order: `--` -> `/`, then a single
//! percent-decode pass undoes both step 1 and step 2 at once.

fn percent_encode_byte(byte: u8, out: &mut String) {
    out.push('%');
    out.push_str(&format!("{byte:02X}"));
}

fn is_control(byte: u8) -> bool {
    byte < 0x20 || byte == 0x7f
}

/// Encode a branch name into a path-safe, injective, reversible string.
pub fn encode(branch: &str) -> String {
    let step1 = escape_hyphens(branch);
    let step2 = escape_reserved(&step1);
    step2.replace('/', "--")
}

fn escape_hyphens(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == '-' {
            percent_encode_byte(b'-', &mut out);
        } else if ch == '%' {
            percent_encode_byte(b'%', &mut out);
        } else {
            out.push(ch);
        }
    }
    out
}

fn escape_reserved(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == ' ' || ch == '.' {
            percent_encode_byte(ch as u8, &mut out);
        } else if ch.is_ascii() && is_control(ch as u8) {
            percent_encode_byte(ch as u8, &mut out);
        } else {
            out.push(ch);
        }
    }
    out
}

/// Decode a string produced by [`encode`] back into the original branch name.
pub fn decode(encoded: &str) -> String {
    let unstructured = encoded.replace("--", "/");
    percent_decode(&unstructured)
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Ok(hex) = std::str::from_utf8(&bytes[i + 1..i + 3]) {
                if let Ok(value) = u8::from_str_radix(hex, 16) {
                    out.push(value);
                    i += 3;
                    continue;
                }
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// `true` if `s` satisfies the codec's safety contract (no `/`, no null
/// byte, no `..`, doesn't start with `.`).
pub fn is_path_safe(s: &str) -> bool {
    !s.contains('/') && !s.contains('\0') && !s.contains("..") && !s.starts_with('.')
}
