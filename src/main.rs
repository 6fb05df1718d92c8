use rtmon::error::AppResult;

fn main() -> AppResult<()> {
    rtmon::entry::run()
}
