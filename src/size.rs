// Human-readable byte sizes (binary units)

const STEP: f64 = 1024.0;
const PREFIXES: [&str; 5] = ["K", "M", "G", "T", "P"];

/// Scale `bytes` to the largest binary unit that keeps the value below 1024.
///
/// Plain bytes print as an integer ("1023 B"), everything else with two
/// decimals ("1.50 KiB"). Values past the pebibyte range stay in PiB.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / STEP;
    let mut prefix = PREFIXES[0];
    for next in &PREFIXES[1..] {
        if value < STEP {
            break;
        }
        value /= STEP;
        prefix = next;
    }
    format!("{:.2} {}iB", value, prefix)
}
