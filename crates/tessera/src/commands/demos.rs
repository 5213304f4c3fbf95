//! Demos command - list the demo views

use tessera::Demo;

pub fn run() {
    for demo in Demo::ALL {
        println!("{:<10} {}", demo.name(), demo.description());
    }
}
