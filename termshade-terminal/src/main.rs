/// Termshade - Rotating Shapes Demo
///
/// Renders a triangle and a quad as animated ASCII art in the terminal.
/// Controls:
///   - WASD / Arrow Keys: Rotate
///   - E/R: Roll
///   - Space: Pause auto-rotation
///   - Q/ESC: Quit

use std::io;

use nalgebra::Point3;
use termshade_core::{Quad, Scene, Shape, Triangle};
use termshade_terminal::TerminalApp;

/// One triangle and one quad, both in front of the screen plane.
fn demo_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_shape(Shape::Triangle(Triangle::new(
        Point3::new(-10.0, 0.0, 3.0),
        Point3::new(10.0, -10.0, 20.0),
        Point3::new(10.0, 10.0, 20.0),
    )));
    scene.add_shape(Shape::Quad(Quad::new(
        Point3::new(-12.0, -6.0, 14.0),
        Point3::new(-2.0, -6.0, 10.0),
        Point3::new(-2.0, 6.0, 10.0),
        Point3::new(-12.0, 6.0, 14.0),
    )));
    scene
}

fn main() -> io::Result<()> {
    println!("Termshade - Loading...");

    let scene = demo_scene();

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene)?;
    app.run()?;

    println!("Thank you for using Termshade!");
    Ok(())
}
