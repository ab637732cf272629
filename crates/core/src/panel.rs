use alloc::string::ToString;

use crate::{Board, Error, Frame, Renderer, Result};

/// Where a [Panel] is in its play/pause/stop cycle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// A state transition request, as delivered by a tick driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    Resume,
    Stop,
}

/// How a [Panel] samples its board into a frame.
///
/// Each scrolling direction is one implementor; the panel drives the offset
/// and calls back into the strategy to fill its frame.
pub trait Scroll {
    /// The `(rows, columns)` of a frame for this board and viewport.
    fn frame_size(&self, board: &Board<'_>, viewport: usize) -> (usize, usize);

    /// The largest scroll offset before wrapping back to 0.
    fn index_upper_bound(&self, board: &Board<'_>) -> Result<usize>;

    /// Fill `frame` with the view of `board` starting at `offset`.
    fn generate_display(&self, board: &Board<'_>, offset: usize, frame: &mut Frame)
    -> Result<()>;
}

/// Scrolls the board right to left: frame column `i` is board column
/// `offset + i`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SideScroll;

impl Scroll for SideScroll {
    fn frame_size(&self, board: &Board<'_>, viewport: usize) -> (usize, usize) {
        (board.height(), viewport)
    }

    fn index_upper_bound(&self, board: &Board<'_>) -> Result<usize> {
        board
            .width()
            .checked_sub(1)
            .ok_or(Error::OutOfRange { index: 0, len: 0 })
    }

    fn generate_display(
        &self,
        board: &Board<'_>,
        offset: usize,
        frame: &mut Frame,
    ) -> Result<()> {
        for i in 0..frame.columns() {
            frame.set_column(i, &board.get_column_at_index(offset + i)?);
        }
        Ok(())
    }
}

/// Scrolls the board bottom to top: frame row `i` is board row `offset + i`.
#[derive(Debug, Copy, Clone, Default)]
pub struct VerticalScroll;

impl Scroll for VerticalScroll {
    fn frame_size(&self, board: &Board<'_>, viewport: usize) -> (usize, usize) {
        (viewport, board.width())
    }

    fn index_upper_bound(&self, board: &Board<'_>) -> Result<usize> {
        board
            .height()
            .checked_sub(1)
            .ok_or(Error::OutOfRange { index: 0, len: 0 })
    }

    fn generate_display(
        &self,
        board: &Board<'_>,
        offset: usize,
        frame: &mut Frame,
    ) -> Result<()> {
        for i in 0..frame.rows() {
            frame.set_row(i, &board.get_row_at_index(offset + i)?);
        }
        Ok(())
    }
}

/// A frame generator moving a fixed-size viewport over a [Board].
///
/// The panel only holds a shared borrow of the board, so the board cannot be
/// reloaded while a panel over it is alive. The frame buffer is allocated once
/// and rewritten on every tick.
#[derive(Debug)]
pub struct Panel<'a, 'd, S> {
    board: &'a Board<'d>,
    scroll: S,
    viewport: usize,
    scroll_offset: usize,
    state: RunState,
    frame: Frame,
}

pub type SideScrollingPanel<'a, 'd> = Panel<'a, 'd, SideScroll>;
pub type VerticalScrollingPanel<'a, 'd> = Panel<'a, 'd, VerticalScroll>;

impl<'a, 'd> Panel<'a, 'd, SideScroll> {
    pub fn side_scrolling(board: &'a Board<'d>, viewport: usize) -> Result<Self> {
        Self::new(board, SideScroll, viewport)
    }
}

impl<'a, 'd> Panel<'a, 'd, VerticalScroll> {
    pub fn vertical_scrolling(board: &'a Board<'d>, viewport: usize) -> Result<Self> {
        Self::new(board, VerticalScroll, viewport)
    }
}

impl<'a, 'd, S: Scroll> Panel<'a, 'd, S> {
    /// Create a stopped panel showing `viewport` columns (or rows, for a
    /// vertical scroll) of `board`.
    pub fn new(board: &'a Board<'d>, scroll: S, viewport: usize) -> Result<Self> {
        if viewport == 0 {
            return Err(Error::InvalidConfig(
                "viewport must be at least one cell".to_string(),
            ));
        }

        let (rows, columns) = scroll.frame_size(board, viewport);
        Ok(Self {
            board,
            scroll,
            viewport,
            scroll_offset: 0,
            state: RunState::Stopped,
            frame: Frame::new(rows, columns),
        })
    }

    pub fn board(&self) -> &'a Board<'d> {
        self.board
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == RunState::Playing
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The frame produced by the last tick.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn index_upper_bound(&self) -> Result<usize> {
        self.scroll.index_upper_bound(self.board)
    }

    /// Start from offset 0. Does nothing while already playing.
    pub fn play(&mut self) {
        if self.state == RunState::Playing {
            return;
        }
        self.scroll_offset = 0;
        self.state = RunState::Playing;
        tracing::debug!("panel playing");
    }

    /// Suspend ticking, keeping the offset. Only applies while playing.
    pub fn pause(&mut self) {
        if self.state == RunState::Playing {
            self.state = RunState::Paused;
            tracing::debug!(offset = self.scroll_offset, "panel paused");
        }
    }

    /// Continue from the current offset. Only applies while paused.
    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Playing;
            tracing::debug!(offset = self.scroll_offset, "panel resumed");
        }
    }

    /// Halt from any state and rewind to offset 0.
    pub fn stop(&mut self) {
        self.scroll_offset = 0;
        self.state = RunState::Stopped;
        tracing::debug!("panel stopped");
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Stop => self.stop(),
        }
    }

    /// Produce one frame, hand it to `renderer` and advance the offset.
    ///
    /// Returns `Ok(false)` without rendering unless the panel is playing.
    pub fn tick<R>(&mut self, renderer: &mut R) -> Result<bool>
    where
        R: Renderer + ?Sized,
    {
        if self.state != RunState::Playing {
            return Ok(false);
        }

        let upper_bound = self.scroll.index_upper_bound(self.board)?;
        self.scroll
            .generate_display(self.board, self.scroll_offset, &mut self.frame)?;
        renderer.render(&self.frame);

        tracing::trace!(offset = self.scroll_offset, upper_bound, "panel tick");
        self.scroll_offset = (self.scroll_offset + 1) % (upper_bound + 1);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BitArray, Character, CharacterDictionary, Padding};
    use alloc::{vec, vec::Vec};
    use proptest::{collection, prelude::*};

    // 2 wide, 2 tall:
    // # .
    // # #
    fn dictionary() -> CharacterDictionary {
        let bits = BitArray::try_from(&[1, 0, 1, 1][..]).unwrap();
        CharacterDictionary::new([vec![Character::new(["l"], bits, 2).unwrap()]])
    }

    fn noop(_: &Frame) {}

    #[test]
    fn side_scroll_samples_consecutive_columns() {
        let dictionary = dictionary();
        let mut board = Board::new(1, Padding::new(0, 0, 0, 1));
        board.load("ll", &dictionary).unwrap();
        // columns: pad, l0, l1, space, l0, l1

        let mut panel = Panel::side_scrolling(&board, 3).unwrap();
        let mut frames = Vec::new();
        let mut record = |frame: &Frame| frames.push(frame.to_rows());

        panel.play();
        assert!(panel.tick(&mut record).unwrap());
        assert!(panel.tick(&mut record).unwrap());

        assert_eq!(frames[0], vec![vec![0, 1, 0], vec![0, 1, 1]]);
        assert_eq!(frames[1], vec![vec![1, 0, 0], vec![1, 1, 0]]);
    }

    #[test]
    fn viewport_wider_than_board_repeats_it() {
        let dictionary = dictionary();
        let mut board = Board::new(0, Padding::default());
        board.load("l", &dictionary).unwrap();

        let mut panel = Panel::side_scrolling(&board, 5).unwrap();
        panel.play();
        panel.tick(&mut noop).unwrap();

        assert_eq!(panel.frame().row(0), &[1, 0, 1, 0, 1]);
        assert_eq!(panel.frame().row(1), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn offset_wraps_after_a_full_board_width() {
        let dictionary = dictionary();
        let mut board = Board::new(2, Padding::uniform(1));
        board.load("lll", &dictionary).unwrap();
        let width = board.width();

        let mut panel = Panel::side_scrolling(&board, 4).unwrap();
        assert_eq!(panel.index_upper_bound(), Ok(width - 1));
        panel.play();
        for expected in 1..width {
            panel.tick(&mut noop).unwrap();
            assert_eq!(panel.scroll_offset(), expected);
        }
        panel.tick(&mut noop).unwrap();
        assert_eq!(panel.scroll_offset(), 0);
    }

    #[test]
    fn vertical_scroll_samples_consecutive_rows() {
        let dictionary = dictionary();
        let mut board = Board::new(0, Padding::new(1, 0, 0, 0));
        board.load("l", &dictionary).unwrap();

        let mut panel = Panel::vertical_scrolling(&board, 2).unwrap();
        assert_eq!((panel.frame().rows(), panel.frame().columns()), (2, 2));
        panel.play();
        panel.tick(&mut noop).unwrap();
        assert_eq!(panel.frame().to_rows(), vec![vec![0, 0], vec![1, 0]]);
        panel.tick(&mut noop).unwrap();
        assert_eq!(panel.frame().to_rows(), vec![vec![1, 0], vec![1, 1]]);
        panel.tick(&mut noop).unwrap();
        assert_eq!(panel.scroll_offset(), 0);
    }

    #[test]
    fn transitions_follow_the_state_machine() {
        let dictionary = dictionary();
        let mut board = Board::default();
        board.load("ll", &dictionary).unwrap();
        let mut panel = Panel::side_scrolling(&board, 2).unwrap();

        assert_eq!(panel.state(), RunState::Stopped);
        assert!(!panel.tick(&mut noop).unwrap());

        // pause and resume only apply from their source states
        panel.pause();
        panel.resume();
        assert_eq!(panel.state(), RunState::Stopped);

        panel.play();
        panel.tick(&mut noop).unwrap();
        panel.tick(&mut noop).unwrap();
        panel.play();
        assert_eq!(panel.scroll_offset(), 2);

        panel.pause();
        panel.pause();
        assert_eq!(panel.state(), RunState::Paused);
        assert_eq!(panel.scroll_offset(), 2);
        assert!(!panel.tick(&mut noop).unwrap());

        panel.apply(Command::Resume);
        assert!(panel.tick(&mut noop).unwrap());
        assert_eq!(panel.scroll_offset(), 3);

        panel.apply(Command::Stop);
        assert_eq!(panel.state(), RunState::Stopped);
        assert_eq!(panel.scroll_offset(), 0);
    }

    #[test]
    fn empty_board_cannot_tick() {
        let board = Board::default();
        let mut panel = Panel::side_scrolling(&board, 3).unwrap();
        panel.play();

        assert_eq!(
            panel.tick(&mut noop),
            Err(Error::OutOfRange { index: 0, len: 0 })
        );
        assert!(matches!(
            Panel::side_scrolling(&board, 0),
            Err(Error::InvalidConfig(_))
        ));
    }

    fn command() -> impl Strategy<Value = Option<Command>> {
        prop_oneof![
            Just(Some(Command::Play)),
            Just(Some(Command::Pause)),
            Just(Some(Command::Resume)),
            Just(Some(Command::Stop)),
            // a tick
            Just(None),
        ]
    }

    proptest! {
        #[test]
        fn offset_tracks_a_simple_model(steps in collection::vec(command(), 0..64)) {
            let dictionary = dictionary();
            let mut board = Board::new(1, Padding::uniform(1));
            board.load("ll", &dictionary).unwrap();
            let width = board.width();
            let mut panel = Panel::side_scrolling(&board, 3).unwrap();

            let mut state = RunState::Stopped;
            let mut offset = 0;
            for step in steps {
                match step {
                    Some(command) => {
                        panel.apply(command);
                        match (command, state) {
                            (Command::Play, RunState::Playing) => {}
                            (Command::Play, _) => { state = RunState::Playing; offset = 0; }
                            (Command::Pause, RunState::Playing) => state = RunState::Paused,
                            (Command::Resume, RunState::Paused) => state = RunState::Playing,
                            (Command::Stop, _) => { state = RunState::Stopped; offset = 0; }
                            _ => {}
                        }
                    }
                    None => {
                        let rendered = panel.tick(&mut noop).unwrap();
                        prop_assert_eq!(rendered, state == RunState::Playing);
                        if rendered {
                            offset = (offset + 1) % width;
                        }
                    }
                }
                prop_assert_eq!(panel.state(), state);
                prop_assert_eq!(panel.scroll_offset(), offset);
            }
        }
    }
}
