// Console report and JSON snapshot

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};
use crate::models::{HostFacts, NOT_AVAILABLE, Snapshot};

const JSON_INDENT: &[u8] = b"    ";

/// "system_info_<host>.json", with spaces in the host name replaced by underscores.
pub fn snapshot_file_name(computer_name: &str) -> String {
    format!("system_info_{}.json", computer_name.replace(' ', "_"))
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    info: &'a HostFacts,
}

/// Write `facts` as 4-space indented UTF-8 JSON, creating or truncating `path`.
pub fn write_snapshot(facts: &HostFacts, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut ser =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(JSON_INDENT));
    SnapshotRef { info: facts }.serialize(&mut ser)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<HostFacts> {
    let snapshot: Snapshot = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    Ok(snapshot.info)
}

/// Render the sectioned console report.
///
/// Sections are written in order; the first one that was not collected stops
/// rendering with [`Error::MissingField`], leaving what was already written in `out`.
pub fn render<W: Write>(facts: &HostFacts, out: &mut W) -> Result<()> {
    let system = facts.system.as_ref().ok_or(Error::MissingField("system"))?;
    writeln!(out, "\n=== System Information ===")?;
    writeln!(out, "Computer name: {}", system.computer_name)?;
    writeln!(out, "OS: {}", system.os)?;
    writeln!(out, "Architecture: {}\n", system.architecture)?;

    let cpu = facts.cpu.as_ref().ok_or(Error::MissingField("cpu"))?;
    writeln!(out, "=== Processor ===")?;
    writeln!(out, "Model: {}", cpu.model.as_deref().unwrap_or(NOT_AVAILABLE))?;
    writeln!(
        out,
        "Cores: {} physical / {} logical",
        cpu.physical_cores
            .map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string()),
        cpu.total_cores
    )?;
    writeln!(out, "Frequency: {}\n", cpu.max_frequency)?;

    let memory = facts.memory.as_ref().ok_or(Error::MissingField("memory"))?;
    writeln!(out, "=== Memory ===")?;
    writeln!(out, "Total: {}", memory.total)?;
    writeln!(out, "Available: {}", memory.available)?;
    writeln!(out, "Used: {}\n", memory.used)?;

    let disks = facts.disks.as_ref().ok_or(Error::MissingField("disks"))?;
    writeln!(out, "=== Disks ===")?;
    for (device, disk) in disks {
        writeln!(out, "Disk {}: {}", device, disk.filesystem)?;
        writeln!(
            out,
            "Total: {} | Used: {} ({})",
            disk.total, disk.used, disk.usage_percent
        )?;
    }

    let network = facts.network.as_ref().ok_or(Error::MissingField("network"))?;
    writeln!(out, "\n=== Network ===")?;
    for (name, iface) in network {
        writeln!(out, "Interface {}:", name)?;
        writeln!(
            out,
            "MAC: {} | IPv4: {} | IPv6: {}",
            iface.mac, iface.ipv4, iface.ipv6
        )?;
    }
    Ok(())
}
