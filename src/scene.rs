use crate::camera::Camera;
use crate::constants::*;
use crate::geometry::{cuboid, torus_knot, MeshData};
use crate::story::{story_pose, StoryPose};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

/// Position, Euler rotation (XYZ order) and scale of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rot, self.position)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub color: Vec3,
    pub opacity: f32,
    pub metalness: f32,
    pub roughness: f32,
}

#[derive(Clone, Debug)]
pub struct MeshNode {
    pub geometry: MeshData,
    pub material: Material,
    pub transform: Transform,
}

#[derive(Clone, Copy, Debug)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// Directional light shining from `position` toward the origin.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the lit surface toward the light.
    pub fn to_light(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Clone, Debug)]
pub struct Starfield {
    pub positions: Vec<Vec3>,
    pub size: f32,
    pub opacity: f32,
    pub color: Vec3,
    pub transform: Transform,
}

/// A floating panel and the parameters of its idle bob.
#[derive(Clone, Debug)]
pub struct Panel {
    pub mesh: MeshNode,
    pub rest: Vec3,
    pub bob_frequency: f32,
    pub bob_phase: f32,
}

impl Panel {
    pub fn bob(&mut self, elapsed: f32) {
        self.mesh.transform.position.y = self.rest.y
            + (elapsed * self.bob_frequency + self.bob_phase).sin() * PANEL_BOB_AMPLITUDE;
    }
}

/// The focal group: a spinning knot plus three panels sharing one transform.
#[derive(Clone, Debug)]
pub struct Centerpiece {
    pub transform: Transform,
    pub knot: MeshNode,
    pub panels: Vec<Panel>,
}

impl Centerpiece {
    /// World matrix of a child given its local transform.
    pub fn world_of(&self, local: &Transform) -> Mat4 {
        self.transform.matrix() * local.matrix()
    }
}

/// Retained scene graph for the presentation.
///
/// Built once at startup and mutated in place every frame: the idle
/// animation spins the knot and bobs the panels, the story pose moves the
/// camera, tilts the centerpiece group and slides the starfield.
#[derive(Clone, Debug)]
pub struct Scene {
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    pub stars: Starfield,
    pub centerpiece: Centerpiece,
}

impl Scene {
    /// Assemble the fixed scene; `rng` scatters the starfield.
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let white = Vec3::from_array(LIGHT_COLOR);
        let knot = MeshNode {
            geometry: torus_knot(
                KNOT_RADIUS,
                KNOT_TUBE,
                KNOT_TUBULAR_SEGMENTS,
                KNOT_RADIAL_SEGMENTS,
                KNOT_P,
                KNOT_Q,
            ),
            material: Material {
                color: Vec3::ONE,
                opacity: 1.0,
                metalness: KNOT_METALNESS,
                roughness: KNOT_ROUGHNESS,
            },
            transform: Transform::default(),
        };
        let panels = PANEL_POSITIONS
            .iter()
            .zip(PANEL_BOB.iter())
            .map(|(pos, bob)| make_panel(Vec3::from_array(*pos), bob[0], bob[1]))
            .collect();

        Self {
            ambient: AmbientLight {
                color: white,
                intensity: AMBIENT_INTENSITY,
            },
            sun: DirectionalLight {
                color: white,
                intensity: DIRECTIONAL_INTENSITY,
                position: Vec3::from_array(DIRECTIONAL_POSITION),
            },
            stars: Starfield {
                positions: scatter_stars(rng, STAR_COUNT),
                size: STAR_SIZE,
                opacity: STAR_OPACITY,
                color: Vec3::ONE,
                transform: Transform::default(),
            },
            centerpiece: Centerpiece {
                transform: Transform::default(),
                knot,
                panels,
            },
        }
    }

    /// Time-driven motion independent of scroll.
    pub fn apply_idle(&mut self, elapsed: f32) {
        let knot = &mut self.centerpiece.knot.transform;
        knot.rotation.x = elapsed * KNOT_SPIN_X;
        knot.rotation.z = elapsed * KNOT_SPIN_Z;
        for panel in &mut self.centerpiece.panels {
            panel.bob(elapsed);
        }
    }

    /// Scroll-driven motion: computes the pose for `t` and applies it.
    pub fn apply_story(&mut self, camera: &mut Camera, t: f32) -> StoryPose {
        let pose = story_pose(t);
        self.apply_pose(camera, &pose);
        pose
    }

    pub fn apply_pose(&mut self, camera: &mut Camera, pose: &StoryPose) {
        camera.look_at(pose.camera_eye, pose.camera_target);
        self.centerpiece.transform.rotation.y = pose.centerpiece_yaw;
        self.centerpiece.transform.rotation.x = pose.centerpiece_pitch;
        self.stars.transform.position.z = pose.stars_z;
    }
}

fn make_panel(rest: Vec3, bob_frequency: f32, bob_phase: f32) -> Panel {
    let [w, h, d] = PANEL_SIZE;
    Panel {
        mesh: MeshNode {
            geometry: cuboid(w, h, d),
            material: Material {
                color: Vec3::ONE,
                opacity: PANEL_OPACITY,
                metalness: PANEL_METALNESS,
                roughness: PANEL_ROUGHNESS,
            },
            transform: Transform::at(rest),
        },
        rest,
        bob_frequency,
        bob_phase,
    }
}

/// Uniform points in x∈[-30,30), y∈[-20,20), z∈(-80,0].
pub fn scatter_stars<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * STAR_SPAN_X,
                (rng.gen::<f32>() - 0.5) * STAR_SPAN_Y,
                -rng.gen::<f32>() * STAR_DEPTH,
            )
        })
        .collect()
}
