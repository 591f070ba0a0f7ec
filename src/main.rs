fn main() {
    keymacro::term::main()
}
