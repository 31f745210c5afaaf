//! Drawing the snake board.

use crate::state::{Snake, GAME_HEIGHT, GAME_WIDTH, PLAY_HEIGHT, PLAY_WIDTH, PLAY_X, PLAY_Y};
use crate::term::ScreenBuffer;
use crate::types::Color;

const SNAKE_HEAD: char = '#';
const SNAKE_BODY: char = 'O';
const FOOD: char = '*';
const TITLE: &str = " SNAKE GAME ";
const CONTROLS: &str = "WASD:Move | SPACE:Boost | P:Pause | Q:Quit";

pub fn draw(snake: &Snake, screen: &mut ScreenBuffer) {
    screen.draw_box(0, 0, GAME_WIDTH, GAME_HEIGHT, None, Color::Cyan);
    screen.draw_text(centered(TITLE), 0, TITLE, Color::Green);

    screen.draw_text(2, 1, &format!(" Score: {} ", snake.score()), Color::Yellow);
    let high = format!(" High: {} ", snake.high_score());
    screen.draw_text(GAME_WIDTH - text_len(&high) - 2, 1, &high, Color::Magenta);

    screen.draw_hline(1, 2, GAME_WIDTH - 2, '-', Color::Cyan);

    // Dotted frame just outside the play area.
    for x in PLAY_X - 1..=PLAY_X + PLAY_WIDTH {
        screen.draw_char(x, PLAY_Y - 1, '.', Color::Blue);
        screen.draw_char(x, PLAY_Y + PLAY_HEIGHT, '.', Color::Blue);
    }
    for y in PLAY_Y..PLAY_Y + PLAY_HEIGHT {
        screen.draw_char(PLAY_X - 1, y, '.', Color::Blue);
        screen.draw_char(PLAY_X + PLAY_WIDTH, y, '.', Color::Blue);
    }

    let (fx, fy) = snake.food();
    screen.draw_char(fx, fy, FOOD, Color::Red);

    for (i, &(x, y)) in snake.body().iter().enumerate() {
        let ch = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
        screen.draw_char(x, y, ch, Color::Green);
    }

    screen.draw_text(centered(CONTROLS), GAME_HEIGHT - 1, CONTROLS, Color::White);

    if snake.is_boosting() {
        screen.draw_text(GAME_WIDTH / 2 - 4, 1, " BOOST! ", Color::Red);
    } else if !snake.can_boost() {
        screen.draw_text(GAME_WIDTH / 2 - 6, 1, " [NO BOOST] ", Color::Blue);
    }

    if snake.is_game_over() {
        draw_game_over(snake, screen);
    } else if snake.is_paused() {
        draw_paused(screen);
    }
}

fn draw_game_over(snake: &Snake, screen: &mut ScreenBuffer) {
    let (w, h) = (28, 7);
    let (x, y) = ((GAME_WIDTH - w) / 2, (GAME_HEIGHT - h) / 2);

    screen.fill_rect(x, y, w, h, ' ', Color::Default);
    screen.draw_box(x, y, w, h, None, Color::Red);
    screen.draw_text(x + 8, y + 2, "GAME OVER!", Color::Red);
    screen.draw_text(
        x + 4,
        y + 4,
        &format!("Final Score: {}", snake.score()),
        Color::Yellow,
    );
    screen.draw_text(x + 3, y + 5, "Press R to Restart", Color::White);
}

fn draw_paused(screen: &mut ScreenBuffer) {
    let (w, h) = (22, 5);
    let (x, y) = ((GAME_WIDTH - w) / 2, (GAME_HEIGHT - h) / 2);

    screen.fill_rect(x, y, w, h, ' ', Color::Default);
    screen.draw_box(x, y, w, h, None, Color::Yellow);
    screen.draw_text(x + 7, y + 2, "PAUSED", Color::Yellow);
    screen.draw_text(x + 2, y + 3, "Press P to Resume", Color::White);
}

fn text_len(text: &str) -> i32 {
    text.chars().count() as i32
}

fn centered(text: &str) -> i32 {
    (GAME_WIDTH - text_len(text)) / 2
}
