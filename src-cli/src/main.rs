fn main() -> anyhow::Result<()> {
    shoplist_app::run()
}
