fn main() -> Result<(), Box<dyn std::error::Error>> {
    termfolio::cli::main()
}
