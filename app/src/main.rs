fn main() {
    imp::runtime::start(tally::app());
}
