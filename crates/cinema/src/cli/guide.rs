//! `cinema guide` handler.

use cinema::SHOOTING_GUIDE;

/// Print the director's guide.
pub fn show_guide() {
    println!("DIRECTOR'S GUIDE");
    println!("{:-<80}", "");
    for (step, section) in SHOOTING_GUIDE.iter().enumerate() {
        println!("{}. {}", step + 1, section.title.to_uppercase());
        println!("   {}", section.body);
        println!();
    }
}
