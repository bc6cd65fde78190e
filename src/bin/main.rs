fn main() -> dl_neighbors::Result<()> {
    dl_neighbors::cli::main()
}
