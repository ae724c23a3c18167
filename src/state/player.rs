use serde::{Deserialize, Serialize};

pub const SPRITE_WIDTH: i32 = 48;
pub const SPRITE_HEIGHT: i32 = 48;
pub const HITBOX_WIDTH: i32 = 24;
pub const HITBOX_HEIGHT: i32 = 12;

pub const STAMINA_MIN: i32 = 0;
pub const STAMINA_MAX: i32 = 100;

/// Cardinal direction a player last moved or was turned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Coordinate delta for a step of `distance` units.
    /// Screen coordinates: `up` decreases y.
    pub fn step(self, distance: i32) -> (i32, i32) {
        match self {
            Facing::Up => (0, -distance),
            Facing::Down => (0, distance),
            Facing::Left => (-distance, 0),
            Facing::Right => (distance, 0),
        }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn max_x(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn max_y(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Inclusive interval intersection on both axes; touching edges overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.max_x()
            && self.max_x() >= other.x
            && self.y <= other.max_y()
            && self.max_y() >= other.y
    }
}

/// Sprite footprint plus the smaller movement hitbox centered inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerBoundingBox {
    pub hitbox: Rect,
    pub sprite: Rect,
}

/// Sprite box for a player anchored at (x, y)
pub fn sprite_at(x: i32, y: i32) -> Rect {
    Rect::new(x, y, SPRITE_WIDTH, SPRITE_HEIGHT)
}

/// Hitbox for a player anchored at (x, y)
pub fn hitbox_at(x: i32, y: i32) -> Rect {
    let offset_x = (SPRITE_WIDTH - HITBOX_WIDTH) / 2;
    let offset_y = (SPRITE_HEIGHT - HITBOX_HEIGHT) / 2;
    Rect::new(
        x.saturating_add(offset_x),
        y.saturating_add(offset_y),
        HITBOX_WIDTH,
        HITBOX_HEIGHT,
    )
}

/// Canonical participant record
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub stamina: i32,
    pub facing: Facing,
    pub skin: String,

    // Transient flags, cleared by the decay tick
    pub is_attacking: bool,
    pub is_walking: bool,
    pub is_dodging: bool,

    // Clock milliseconds when each flag was last set
    pub last_attack: Option<u64>,
    pub last_walk: Option<u64>,
    pub last_dodge: Option<u64>,
}

impl Player {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            health: 100,
            stamina: STAMINA_MAX,
            facing: Facing::default(),
            skin: String::new(),
            is_attacking: false,
            is_walking: false,
            is_dodging: false,
            last_attack: None,
            last_walk: None,
            last_dodge: None,
        }
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    pub fn with_stamina(mut self, stamina: i32) -> Self {
        self.stamina = stamina.clamp(STAMINA_MIN, STAMINA_MAX);
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn sprite(&self) -> Rect {
        sprite_at(self.x, self.y)
    }

    pub fn hitbox(&self) -> Rect {
        hitbox_at(self.x, self.y)
    }

    pub fn bounding_box(&self) -> PlayerBoundingBox {
        PlayerBoundingBox {
            hitbox: self.hitbox(),
            sprite: self.sprite(),
        }
    }

    /// Melee reach: 10 units past the sprite on the facing axis,
    /// full sprite extent on the other axis.
    pub fn attack_box(&self, reach: i32) -> Rect {
        let (x, y) = (self.x, self.y);
        match self.facing {
            Facing::Up => Rect::new(x, y.saturating_sub(reach), SPRITE_WIDTH, reach),
            Facing::Down => Rect::new(x, y.saturating_add(SPRITE_HEIGHT), SPRITE_WIDTH, reach),
            Facing::Left => Rect::new(x.saturating_sub(reach), y, reach, SPRITE_HEIGHT),
            Facing::Right => Rect::new(x.saturating_add(SPRITE_WIDTH), y, reach, SPRITE_HEIGHT),
        }
    }

    /// Position `distance` units away in `facing`, pinned at the edge of
    /// the coordinate range
    pub fn stepped(&self, facing: Facing, distance: i32) -> (i32, i32) {
        let (dx, dy) = facing.step(distance);
        (self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}
