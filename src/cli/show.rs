//! Show command implementation

use std::path::Path;

use anyhow::Result;

use address_groups::store::load_group;

/// Print a group file in a readable form
pub fn show_command(file: &Path) -> Result<()> {
    let group = load_group(file)?;

    println!("{} [{}] ({} addresses)\n", group.name, group.id, group.addresses.len());

    for (index, addr) in group.addresses.iter().enumerate() {
        let id = addr.id.as_deref().unwrap_or("unsaved");
        if addr.description.is_empty() {
            println!("  {}. {} ({})", index + 1, addr.address, id);
        } else {
            println!("  {}. {} - {} ({})", index + 1, addr.address, addr.description, id);
        }
    }

    Ok(())
}
