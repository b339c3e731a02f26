fn main() {
    cognivus_site::run();
}
