//! Hero carousel state.
//!
//! Slides wrap around in both directions. Autoplay advances one slide per
//! interval unless the user is dragging; any manual move restarts the
//! interval.

/// Default autoplay interval.
pub const DEFAULT_AUTOPLAY_MS: u64 = 5_000;

/// Default slide transition speed.
pub const DEFAULT_SPEED_MS: u64 = 800;

/// One hero slide. Title and subtitle are translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
	pub title_key: &'static str,
	pub subtitle_key: &'static str,
	pub image: &'static str,
}

/// The home page slides.
pub static HERO_SLIDES: [Slide; 3] = [
	Slide {
		title_key: "Build Your Dream Website",
		subtitle_key: "We craft scalable and beautiful digital experiences.",
		image: "hero1.webp",
	},
	Slide {
		title_key: "Amazing UI/UX Design",
		subtitle_key: "Intuitive and engaging interfaces for your users.",
		image: "hero2.webp",
	},
	Slide {
		title_key: "Grow Your Business Online",
		subtitle_key: "E-commerce, SEO, and web solutions that convert.",
		image: "hero3.webp",
	},
];

/// Carousel position and autoplay clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCarousel {
	slides: &'static [Slide],
	index: usize,
	autoplay_ms: u64,
	speed_ms: u64,
	last_move_at: u64,
	dragging: bool,
}

impl HeroCarousel {
	/// Starts at the first slide with the autoplay clock at `now_ms`.
	pub fn new(slides: &'static [Slide], autoplay_ms: u64, now_ms: u64) -> Self {
		Self {
			slides,
			index: 0,
			autoplay_ms,
			speed_ms: DEFAULT_SPEED_MS,
			last_move_at: now_ms,
			dragging: false,
		}
	}

	pub fn hero(now_ms: u64) -> Self {
		Self::new(&HERO_SLIDES, DEFAULT_AUTOPLAY_MS, now_ms)
	}

	/// Sets the slide transition speed.
	pub fn with_speed(mut self, speed_ms: u64) -> Self {
		self.speed_ms = speed_ms;
		self
	}

	pub fn speed_ms(&self) -> u64 {
		self.speed_ms
	}

	pub fn autoplay_ms(&self) -> u64 {
		self.autoplay_ms
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn len(&self) -> usize {
		self.slides.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slides.is_empty()
	}

	pub fn current(&self) -> Option<&'static Slide> {
		self.slides.get(self.index)
	}

	pub fn slides(&self) -> &'static [Slide] {
		self.slides
	}

	pub fn next(&mut self, now_ms: u64) -> usize {
		self.step(1, now_ms)
	}

	pub fn prev(&mut self, now_ms: u64) -> usize {
		self.step(self.len().saturating_sub(1), now_ms)
	}

	/// Jumps to `index`, wrapped into range.
	pub fn go_to(&mut self, index: usize, now_ms: u64) -> usize {
		if !self.is_empty() {
			self.index = index % self.len();
		}
		self.last_move_at = now_ms;
		self.index
	}

	pub fn pointer_down(&mut self) {
		self.dragging = true;
	}

	pub fn pointer_up(&mut self, now_ms: u64) {
		self.dragging = false;
		self.last_move_at = now_ms;
	}

	/// Advances when an autoplay interval has elapsed. Returns whether the
	/// slide changed.
	pub fn tick(&mut self, now_ms: u64) -> bool {
		if self.dragging || self.len() < 2 || self.autoplay_ms == 0 {
			return false;
		}
		if now_ms.saturating_sub(self.last_move_at) < self.autoplay_ms {
			return false;
		}
		self.next(now_ms);
		true
	}

	fn step(&mut self, by: usize, now_ms: u64) -> usize {
		if !self.is_empty() {
			self.index = (self.index + by) % self.len();
		}
		self.last_move_at = now_ms;
		self.index
	}
}
