use slotwt::shell::{render_init, Shell};

pub fn handle_shell_init(shell: Shell) -> anyhow::Result<()> {
    print!("{}", render_init(shell));
    Ok(())
}
