use droidkit::kernel::text::{to_class_name, to_slug};

pub fn slug(text: &str) {
    println!("{}", to_slug(text));
}

pub fn class_name(name: &str) {
    println!("{}", to_class_name(name));
}
