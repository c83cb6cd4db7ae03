use console::Style;
use entropass::{Password, SCHEMES, Scheme};

pub const MIN_SAFE_ENTROPY: f64 = 72.0;
pub const PARANOID_ENTROPY: f64 = 128.0;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

impl DisplayOptions {
    pub fn detect(quiet: bool) -> Self {
        Self {
            unicode_support: detect_unicode_support(),
            color_support: detect_color_support(),
            quiet,
        }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_branches(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

/// Rating and whether it meets the safe threshold.
pub fn strength(bits: f64) -> (&'static str, bool) {
    if bits >= PARANOID_ENTROPY {
        ("Paranoid", true)
    } else if bits >= MIN_SAFE_ENTROPY {
        ("Strong", true)
    } else {
        ("Weak", false)
    }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    match (options.color_support, secure) {
        (false, _) => Style::new(),
        (true, true) => Style::new().green(),
        (true, false) => Style::new().yellow(),
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

pub fn display_output(
    passwords: &[Password],
    scheme: &Scheme,
    target_bits: f64,
    options: &DisplayOptions,
) {
    if options.quiet {
        for password in passwords {
            println!("{}", &*password.text);
        }
        return;
    }

    for (i, password) in passwords.iter().enumerate() {
        println!("Out[{}]:\n{}\n", i, &*password.text);
    }

    display_settings(scheme, target_bits, options);
    display_stats(passwords, options);
}

fn display_settings(scheme: &Scheme, target_bits: f64, options: &DisplayOptions) {
    let (branch, last) = tree_branches(options.unicode_support);

    println!("Settings:");
    println!("  {} Scheme     {}", branch, scheme.name);
    println!(
        "  {} Generator  {} ({:.2} bits)",
        branch,
        scheme.generator.describe(),
        scheme.generator.entropy()
    );
    println!("  {} Separator  {}", branch, scheme.separator);
    println!("  {} Target     {:.1} bits", branch, target_bits);
    println!("  {} Keystream  ChaCha20 (256-bit, OS seeded)", branch);
    println!("  {} Sampling   Unbiased rejection", last);
    println!();
}

fn display_stats(passwords: &[Password], options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_branches(options.unicode_support);

    // The weakest output determines the verdict.
    let bits = passwords
        .iter()
        .map(|password| password.bits)
        .fold(f64::INFINITY, f64::min);
    let length = passwords
        .iter()
        .map(|password| password.length)
        .min()
        .unwrap_or(0);

    let (status_text, secure) = strength(bits);
    let status_icon = if secure { check_ok } else { check_warn };
    let entropy_style = status_style(secure, options);

    println!("Stats:");
    println!(
        "  {} Entropy    {} {} bits ({})",
        branch,
        entropy_style.apply_to(format!("[{}]", status_icon)),
        entropy_style.apply_to(format!("{:.1}", bits)),
        entropy_style.apply_to(status_text)
    );
    println!(
        "  {} Length     {} {}",
        if passwords.len() > 1 { branch } else { last },
        length,
        plural(length, "char", "chars")
    );
    if passwords.len() > 1 {
        println!("  {} Count      {}", last, passwords.len());
    }

    println!(
        "\n{} Security: {}",
        entropy_style.apply_to(format!("[{}]", status_icon)),
        entropy_style.apply_to(status_text)
    );
}

pub fn display_schemes(options: &DisplayOptions) {
    let width = SCHEMES
        .iter()
        .map(|scheme| scheme.name.len())
        .max()
        .unwrap_or(0);
    let name_style = if options.color_support {
        Style::new().bold()
    } else {
        Style::new()
    };

    for scheme in SCHEMES {
        println!(
            "{}  {}",
            name_style.apply_to(format!("{:width$}", scheme.name, width = width)),
            scheme.description
        );
    }
}
