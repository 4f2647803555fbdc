fn main() {
    slint_build::compile("ui/snipgrab.slint").unwrap();
}
