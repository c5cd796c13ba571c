// Linux-specific helpers: /proc and /sys.

/// Read first "model name" from /proc/cpuinfo (Linux). Prefer over sysinfo when it returns "cpu0" etc.
pub(super) fn read_cpu_model_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        parse_cpu_model(&content)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Kernel build string, what `uname -v` prints (e.g. "#1 SMP PREEMPT_DYNAMIC ...").
pub(super) fn read_kernel_build_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let v = std::fs::read_to_string("/proc/sys/kernel/version").ok()?;
        let v = v.trim();
        if v.is_empty() {
            return None;
        }
        Some(v.to_string())
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Highest frequency cpu0 may run at, from cpufreq (reported in kHz).
pub(super) fn read_cpu_max_freq_mhz_linux() -> Option<f64> {
    #[cfg(target_os = "linux")]
    {
        let content =
            std::fs::read_to_string("/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq")
                .ok()?;
        parse_khz_as_mhz(&content)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_cpu_model(cpuinfo: &str) -> Option<String> {
    let line = cpuinfo.lines().find(|l| l.starts_with("model name"))?;
    line.find(": ")
        .map(|i| line[i + 2..].trim())
        .filter(|s| !s.is_empty() && *s != "cpu0")
        .map(str::to_string)
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_khz_as_mhz(content: &str) -> Option<f64> {
    match content.trim().parse::<u64>() {
        Ok(khz) if khz > 0 => Some(khz as f64 / 1000.0),
        _ => None,
    }
}
