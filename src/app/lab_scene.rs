use anyhow::{Context, Result};
use glam::{Mat4, Vec2, Vec3, Vec4};

use super::{AppDesc, LabKind};
use crate::gameplay::{CameraCreateInfo, CameraDesc, FirstPersonCamera, FrameInput};
use crate::geom::{
    generate_axis_gizmo, generate_circle, generate_circle_layout, generate_floor, generate_house,
    generate_square_outline, generate_terrain_mesh, CircleLayout, CircleLayoutParams, Mesh,
};
use crate::heightfield::{generate_noise_height_field, read_height_field, HeightField};
use crate::renderer::{DrawParams, MeshHandle, RendererSurface};
use crate::scene::{
    centered_ortho, crane_transforms, look_at_origin, orbit_meshes, orbit_transforms,
    perspective_projection, CraneDesc, CraneState, ORBIT_EYE, ORBIT_V_FOV_DEG, ORBIT_Z_FAR,
    ORBIT_Z_NEAR,
};
use crate::util::MeshStats;

const CIRCLE_SEGMENTS: u32 = 200;
const ORBIT_GIZMO_LENGTH: f32 = 80.0;
const TERRAIN_GIZMO_LENGTH: f32 = 255.0;
const VILLAGE_CAMERA_SPEED: f32 = 10.0;
const TERRAIN_CAMERA_SPEED: f32 = 500.0;

const OUTLINE_CLEAR: Vec4 = Vec4::new(0.95, 0.95, 0.95, 1.0);
const WHITE_CLEAR: Vec4 = Vec4::ONE;

const BLACK: Vec3 = Vec3::ZERO;
const BLUE: Vec3 = Vec3::new(0.16, 0.23, 0.88);
const ORANGE: Vec3 = Vec3::new(1.0, 0.67, 0.0);
const RED: Vec3 = Vec3::new(0.81, 0.02, 0.0);
const GRASS: Vec3 = Vec3::new(0.3, 0.6, 0.25);
const BRICK: Vec3 = Vec3::new(0.7, 0.35, 0.25);

struct CraneHandles {
    base: MeshHandle,
    arm1: MeshHandle,
    arm2: MeshHandle,
    rope: MeshHandle,
    load: MeshHandle,
}

struct OrbitHandles {
    triangle: MeshHandle,
    square: MeshHandle,
    circle: MeshHandle,
    small_triangle: MeshHandle,
}

enum SceneBody {
    Outlines {
        outlines: Vec<MeshHandle>,
    },
    Orbit {
        bodies: OrbitHandles,
        gizmo: MeshHandle,
    },
    Crane {
        desc: CraneDesc,
        state: CraneState,
        parts: CraneHandles,
        gizmo: MeshHandle,
    },
    Village {
        camera: FirstPersonCamera,
        floor: MeshHandle,
        house: MeshHandle,
    },
    Terrain {
        camera: FirstPersonCamera,
        terrain: MeshHandle,
        gizmo: MeshHandle,
    },
}

/// The meshes and per-frame state of one lab.
pub struct LabScene {
    kind: LabKind,
    body: SceneBody,
    frame: u64,
}

/// Uploads a generated mesh and notes it in the stats table.
fn upload(
    surface: &mut impl RendererSurface,
    stats: &mut MeshStats,
    name: &str,
    mesh: &Mesh,
) -> Result<MeshHandle> {
    stats.record(name, mesh);
    surface
        .upload(name, mesh)
        .with_context(|| format!("failed to upload mesh {:?}", name))
}

fn upload_all(
    surface: &mut impl RendererSurface,
    stats: &mut MeshStats,
    prefix: &str,
    meshes: &[Mesh],
) -> Result<Vec<MeshHandle>> {
    meshes
        .iter()
        .enumerate()
        .map(|(i, mesh)| upload(surface, stats, &format!("{} {}", prefix, i), mesh))
        .collect()
}

fn circle_layout(center: Vec2, radius: f32, layout: CircleLayout) -> Vec<Mesh> {
    generate_circle_layout(&CircleLayoutParams {
        center,
        radius,
        segment_count: CIRCLE_SEGMENTS,
        layout,
    })
}

impl LabScene {
    /// Generates and uploads everything the configured lab draws.
    pub fn build(desc: &AppDesc, surface: &mut impl RendererSurface) -> Result<Self> {
        let mut stats = MeshStats::new();
        let s = &mut stats;

        let body = match desc.lab {
            LabKind::Square => SceneBody::Outlines {
                outlines: vec![upload(
                    surface,
                    s,
                    "square",
                    &generate_square_outline(Vec2::new(-100.0, -100.0), 200.0),
                )?],
            },
            LabKind::Circle => SceneBody::Outlines {
                outlines: vec![upload(
                    surface,
                    s,
                    "circle",
                    &generate_circle(Vec2::new(100.0, -100.0), 400.0, CIRCLE_SEGMENTS),
                )?],
            },
            LabKind::CirclesNested => {
                let circles = circle_layout(
                    Vec2::new(0.0, 100.0),
                    400.0,
                    CircleLayout::NestedInside {
                        reduction: 0.8,
                        amount: 6,
                    },
                );
                SceneBody::Outlines {
                    outlines: upload_all(surface, s, "nested circle", &circles)?,
                }
            }
            LabKind::CirclesInline => {
                let circles = circle_layout(
                    Vec2::new(-500.0, 0.0),
                    200.0,
                    CircleLayout::ChainedInline {
                        reduction: 0.8,
                        amount: 6,
                    },
                );
                SceneBody::Outlines {
                    outlines: upload_all(surface, s, "inline circle", &circles)?,
                }
            }
            LabKind::CirclesInclined => {
                let circles = circle_layout(
                    Vec2::new(-500.0, 0.0),
                    150.0,
                    CircleLayout::ChainedInclined {
                        angle_deg: 25.0,
                        reduction: 0.8,
                        amount: 6,
                    },
                );
                SceneBody::Outlines {
                    outlines: upload_all(surface, s, "inclined circle", &circles)?,
                }
            }
            LabKind::Orbit => {
                let meshes = orbit_meshes();
                SceneBody::Orbit {
                    bodies: OrbitHandles {
                        triangle: upload(surface, s, "triangle", &meshes.triangle)?,
                        square: upload(surface, s, "square", &meshes.square)?,
                        circle: upload(surface, s, "circle", &meshes.circle)?,
                        small_triangle: upload(surface, s, "small triangle", &meshes.small_triangle)?,
                    },
                    gizmo: upload(surface, s, "gizmo", &generate_axis_gizmo(ORBIT_GIZMO_LENGTH))?,
                }
            }
            LabKind::Crane => {
                let crane = CraneDesc::default();
                if let Err(msg) = crane.validate() {
                    anyhow::bail!("invalid crane description: {}", msg);
                }
                let meshes = crane.meshes();
                SceneBody::Crane {
                    parts: CraneHandles {
                        base: upload(surface, s, "base", &meshes.base)?,
                        arm1: upload(surface, s, "arm1", &meshes.arm1)?,
                        arm2: upload(surface, s, "arm2", &meshes.arm2)?,
                        rope: upload(surface, s, "rope", &meshes.rope)?,
                        load: upload(surface, s, "load", &meshes.load)?,
                    },
                    gizmo: upload(surface, s, "gizmo", &generate_axis_gizmo(ORBIT_GIZMO_LENGTH))?,
                    desc: crane,
                    state: CraneState::default(),
                }
            }
            LabKind::Village => SceneBody::Village {
                floor: upload(surface, s, "floor", &generate_floor(40.0, 40.0, 0.15))?,
                house: upload(
                    surface,
                    s,
                    "house",
                    &generate_house(Vec3::new(-10.0, 0.0, -7.5), 10.0, 10.0, 5.0, 15.0),
                )?,
                camera: FirstPersonCamera::new(CameraCreateInfo {
                    position: Vec3::new(0.0, 8.0, 30.0),
                    horizontal_angle: std::f32::consts::PI,
                    vertical_angle: -0.1,
                    desc: CameraDesc::default().with_speed(VILLAGE_CAMERA_SPEED),
                }),
            },
            LabKind::Terrain => {
                let field = Self::load_height_field(desc)?;
                let terrain = generate_terrain_mesh(&field);
                SceneBody::Terrain {
                    terrain: upload(surface, s, "terrain", &terrain)?,
                    gizmo: upload(surface, s, "gizmo", &generate_axis_gizmo(TERRAIN_GIZMO_LENGTH))?,
                    camera: FirstPersonCamera::new(Self::terrain_camera(&field)),
                }
            }
        };

        log::info!(
            "Built lab {} with {} vertices",
            desc.lab,
            stats.total_vertices()
        );
        stats.summary();

        Ok(Self {
            kind: desc.lab,
            body,
            frame: 0,
        })
    }

    fn load_height_field(desc: &AppDesc) -> Result<HeightField> {
        match &desc.height_field_path {
            Some(path) => read_height_field(path)
                .with_context(|| format!("failed to read height field {:?}", path)),
            None => {
                log::info!(
                    "No height field given, generating {}x{} noise terrain",
                    desc.noise.rows,
                    desc.noise.cols
                );
                generate_noise_height_field(&desc.noise)
                    .context("failed to generate noise height field")
            }
        }
    }

    /// Above the near edge of the field, looking along +Z across it.
    fn terrain_camera(field: &HeightField) -> CameraCreateInfo {
        let (width, _) = field.extent();
        let (_, highest) = field.height_range();
        CameraCreateInfo {
            position: Vec3::new(width / 2.0, highest + 100.0, -100.0),
            horizontal_angle: 0.0,
            vertical_angle: -0.3,
            desc: CameraDesc::default().with_speed(TERRAIN_CAMERA_SPEED),
        }
    }

    pub fn kind(&self) -> LabKind {
        self.kind
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn crane_state(&self) -> Option<CraneState> {
        match &self.body {
            SceneBody::Crane { state, .. } => Some(*state),
            _ => None,
        }
    }

    pub fn camera(&self) -> Option<&FirstPersonCamera> {
        match &self.body {
            SceneBody::Village { camera, .. } | SceneBody::Terrain { camera, .. } => Some(camera),
            _ => None,
        }
    }

    /// Runs one frame: applies input, then issues every draw of the lab.
    pub fn frame(&mut self, dt: f32, input: &FrameInput, surface: &mut impl RendererSurface) {
        let size = input.framebuffer_size;
        let clear = match self.body {
            SceneBody::Outlines { .. } => OUTLINE_CLEAR,
            _ => WHITE_CLEAR,
        };
        surface.begin_frame(clear);

        match &mut self.body {
            SceneBody::Outlines { outlines } => {
                let proj = centered_ortho(size, 1.0, -1.0, 1.0);
                for handle in outlines.iter() {
                    surface.draw(*handle, &DrawParams::new(proj).with_color(BLACK));
                }
            }
            SceneBody::Orbit { bodies, gizmo } => {
                let t = orbit_transforms(self.frame as f32);
                let view_proj = perspective_projection(
                    ORBIT_V_FOV_DEG,
                    input.aspect_ratio(),
                    ORBIT_Z_NEAR,
                    ORBIT_Z_FAR,
                ) * look_at_origin(ORBIT_EYE);
                surface.draw(bodies.triangle, &DrawParams::new(view_proj * t.triangle));
                surface.draw(*gizmo, &DrawParams::new(view_proj));
                surface.draw(bodies.square, &DrawParams::new(view_proj * t.square));
                surface.draw(bodies.circle, &DrawParams::new(view_proj * t.circle));
                surface.draw(
                    bodies.small_triangle,
                    &DrawParams::new(view_proj * t.small_triangle),
                );
            }
            SceneBody::Crane {
                desc,
                state,
                parts,
                gizmo,
            } => {
                state.apply_input(&input.keys);
                let t = crane_transforms(desc, state);
                let view_proj = centered_ortho(size, 4.0, 0.0, 100.0)
                    * Mat4::look_at_rh(Vec3::Z, Vec3::ZERO, Vec3::Y);
                surface.draw(*gizmo, &DrawParams::new(view_proj));
                let draws = [
                    (parts.base, t.base, BLUE),
                    (parts.arm1, t.arm1, ORANGE),
                    (parts.arm2, t.arm2, ORANGE),
                    (parts.rope, t.rope, BLACK),
                    (parts.load, t.load, RED),
                ];
                for (handle, model, color) in draws {
                    surface.draw(handle, &DrawParams::new(view_proj * model).with_color(color));
                }
            }
            SceneBody::Village {
                camera,
                floor,
                house,
            } => {
                camera.update(dt, input);
                let view_proj = camera.proj_mat() * camera.view_mat();
                surface.draw(*floor, &DrawParams::new(view_proj).with_color(GRASS));
                surface.draw(*house, &DrawParams::new(view_proj).with_color(BRICK));
            }
            SceneBody::Terrain {
                camera,
                terrain,
                gizmo,
            } => {
                camera.update(dt, input);
                let view_proj = camera.proj_mat() * camera.view_mat();
                surface.draw(*terrain, &DrawParams::new(view_proj).with_color(GRASS));
                surface.draw(*gizmo, &DrawParams::new(view_proj));
            }
        }

        surface.end_frame();
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::{LabKey, PressedKeys};
    use crate::heightfield::{write_height_field, NoiseHeightFieldDesc};
    use crate::renderer::HeadlessSurface;

    fn small_desc(lab: LabKind) -> AppDesc {
        AppDesc {
            lab,
            noise: NoiseHeightFieldDesc {
                rows: 12,
                cols: 9,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn idle() -> FrameInput {
        FrameInput::idle([800, 600])
    }

    fn draws_per_frame(lab: LabKind) -> usize {
        match lab {
            LabKind::Square | LabKind::Circle => 1,
            LabKind::CirclesNested | LabKind::CirclesInline | LabKind::CirclesInclined => 6,
            LabKind::Orbit => 5,
            LabKind::Crane => 6,
            LabKind::Village | LabKind::Terrain => 2,
        }
    }

    #[test]
    fn every_lab_builds_and_draws() {
        for lab in LabKind::ALL {
            let mut surface = HeadlessSurface::new();
            let mut scene = LabScene::build(&small_desc(lab), &mut surface).unwrap();
            assert_eq!(scene.kind(), lab);
            for _ in 0..3 {
                scene.frame(1.0 / 60.0, &idle(), &mut surface);
            }
            assert_eq!(surface.last_frame_draws(), draws_per_frame(lab), "{lab}");
            assert_eq!(scene.frame_count(), 3);
            assert_eq!(surface.frames(), 3);
        }
    }

    #[test]
    fn circle_layouts_upload_one_mesh_per_circle() {
        let mut surface = HeadlessSurface::new();
        LabScene::build(&small_desc(LabKind::CirclesInline), &mut surface).unwrap();
        assert_eq!(surface.meshes().len(), 6);
        let vertices: usize = surface.meshes().iter().map(|m| m.vertex_count).sum();
        assert_eq!(vertices, 6 * CIRCLE_SEGMENTS as usize);
    }

    #[test]
    fn crane_follows_arrow_keys() {
        let mut surface = HeadlessSurface::new();
        let mut scene = LabScene::build(&small_desc(LabKind::Crane), &mut surface).unwrap();
        let input = FrameInput {
            keys: PressedKeys::from_keys([LabKey::ArrowLeft, LabKey::ArrowUp]),
            ..idle()
        };
        for _ in 0..10 {
            scene.frame(1.0 / 60.0, &input, &mut surface);
        }
        let state = scene.crane_state().unwrap();
        assert_eq!(state.arm1_angle, -20.0);
        assert_eq!(state.arm2_angle, 50.0);
        assert!(scene.camera().is_none());
    }

    #[test]
    fn village_camera_walks_forward() {
        let mut surface = HeadlessSurface::new();
        let mut scene = LabScene::build(&small_desc(LabKind::Village), &mut surface).unwrap();
        let start = scene.camera().unwrap().position();
        let input = FrameInput {
            keys: PressedKeys::from_keys([LabKey::Forward]),
            ..idle()
        };
        scene.frame(1.0, &input, &mut surface);
        let camera = scene.camera().unwrap();
        let moved = camera.position() - start;
        assert!((moved - camera.direction() * VILLAGE_CAMERA_SPEED).length() < 1e-3);
    }

    #[test]
    fn terrain_reads_a_height_field_file() {
        let field = HeightField::from_fn(4, 5, 2.0, 3.0, |r, c| (r + c) as f32).unwrap();
        let path = std::env::temp_dir().join(format!("labkit-field-{}.txt", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();
        write_height_field(&field, file).unwrap();

        let desc = AppDesc {
            height_field_path: Some(path.clone()),
            ..small_desc(LabKind::Terrain)
        };
        let mut surface = HeadlessSurface::new();
        LabScene::build(&desc, &mut surface).unwrap();
        std::fs::remove_file(&path).unwrap();

        let terrain = &surface.meshes()[0];
        assert_eq!(terrain.name, "terrain");
        assert_eq!(terrain.vertex_count, 20);
        assert_eq!(terrain.index_count, 2 * 3 * 4 * 3);
    }

    #[test]
    fn missing_height_field_fails_the_build() {
        let desc = AppDesc {
            height_field_path: Some("/definitely/not/a/field.txt".into()),
            ..small_desc(LabKind::Terrain)
        };
        let mut surface = HeadlessSurface::new();
        let err = LabScene::build(&desc, &mut surface).err().unwrap();
        assert!(format!("{:#}", err).contains("failed to read height field"));
    }
}
