use crate::registry::CommandRegistry;
use anyhow::Result;

pub fn print_commands(registry: &dyn CommandRegistry) -> Result<()> {
    for name in registry.list()? {
        println!("{name}");
    }
    Ok(())
}
