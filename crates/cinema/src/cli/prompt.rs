//! `cinema prompt` handler.

use cinema::{CinemaResult, PromptSections, ShotArgs, StudioConfig, focal_length_label};

/// Print the composed prompt for the given selections.
pub fn show_prompt(args: &ShotArgs, config: &StudioConfig, sections: bool) -> CinemaResult<()> {
    let shot = args.to_configuration(config, Vec::new())?;
    let prompt = PromptSections::from(&shot);

    if !sections {
        println!("{}", prompt);
        return Ok(());
    }

    println!("{}", shot.settings());
    println!("Framing: {}", focal_length_label(*shot.focal_length()));
    println!("{:-<80}", "");
    let headed = [
        ("Header", Some(prompt.header().to_string())),
        ("Camera", Some(prompt.camera().clone())),
        ("Optics", Some(prompt.optics().clone())),
        ("Angle", prompt.angle().clone()),
        ("Physics", Some(prompt.physics().clone())),
        ("Atmosphere", Some(prompt.atmosphere().to_string())),
        ("Subject", Some(prompt.subject().clone())),
        ("Closing", Some(prompt.closing().to_string())),
    ];
    for (heading, line) in headed {
        match line {
            Some(line) => println!("[{}]\n{}\n", heading, line),
            None => println!("[{}]\n(disabled)\n", heading),
        }
    }
    Ok(())
}
