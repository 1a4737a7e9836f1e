use collateral_studio;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the collateral designer
    collateral_studio::run_app()
}
