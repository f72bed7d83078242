use anyhow::Result;
use recurdate_core::RecurrenceSpec;
use recurdate_core::prompt::build_prompt;

pub fn run(spec: &RecurrenceSpec) -> Result<()> {
    println!("{}", build_prompt(spec));
    Ok(())
}
