fn main() {
    ybrainfuck::fizzbuzz::run();
}
