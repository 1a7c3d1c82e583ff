//! Packs animated scene state into per-instance GPU records for the quad
//! pipeline. Pure data; no wgpu types here.

use crate::constants::*;
use glam::{Mat4, Quat, Vec3};
use ornament_core::{ChaoticSwarm, OrnamentBatch, OrnamentKind, PhotoFrame, Scene, StarCenterpiece};

pub const FLAG_BILLBOARD: f32 = 1.0;
pub const FLAG_DISC: f32 = 1.0;

/// One quad instance. `params.x` selects camera-facing billboards (size taken
/// from the model's X scale), `params.y` selects a soft round mask.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub back_color: [f32; 4],
    pub params: [f32; 4],
}

impl InstanceRaw {
    pub fn billboard(center: Vec3, size: f32, color: [f32; 4]) -> Self {
        Self {
            model: Mat4::from_scale_rotation_translation(Vec3::splat(size), Quat::IDENTITY, center)
                .to_cols_array_2d(),
            color,
            back_color: color,
            params: [FLAG_BILLBOARD, FLAG_DISC, 0.0, 0.0],
        }
    }

    pub fn oriented(model: Mat4, color: [f32; 4], back_color: [f32; 4], disc: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
            back_color,
            params: [0.0, if disc { FLAG_DISC } else { 0.0 }, 0.0, 0.0],
        }
    }

    #[inline]
    pub fn is_billboard(&self) -> bool {
        self.params[0] > 0.5
    }
}

#[inline]
fn shade(rgb: [f32; 3], gain: f32, alpha: f32) -> [f32; 4] {
    [rgb[0] * gain, rgb[1] * gain, rgb[2] * gain, alpha]
}

pub fn pack_ornaments(batch: &OrnamentBatch, origin: Vec3, out: &mut Vec<InstanceRaw>) {
    let to_world = Mat4::from_translation(origin);
    for t in batch.transforms() {
        let center = origin + t.position;
        let inst = match batch.kind() {
            OrnamentKind::Box => {
                let model = to_world * t.to_matrix() * Mat4::from_scale(Vec3::splat(BOX_SIZE));
                let back = shade([BOX_COLOR[0], BOX_COLOR[1], BOX_COLOR[2]], 0.6, 1.0);
                InstanceRaw::oriented(model, BOX_COLOR, back, false)
            }
            OrnamentKind::Ball => InstanceRaw::billboard(center, BALL_SIZE * t.scale, BALL_COLOR),
            OrnamentKind::Light => InstanceRaw::billboard(center, LIGHT_SIZE * t.scale, LIGHT_COLOR),
        };
        out.push(inst);
    }
}

/// Star core plus a halo sized by the point light. Nothing while hidden.
pub fn pack_star(star: &StarCenterpiece, out: &mut Vec<InstanceRaw>) {
    let v = star.visual();
    if !v.visible {
        return;
    }
    let gain = 1.0 + v.emissive_intensity * 0.25;
    let core = Mat4::from_scale_rotation_translation(
        Vec3::splat(STAR_CORE_SIZE * v.scale),
        Quat::from_rotation_y(v.yaw) * Quat::from_rotation_z(std::f32::consts::FRAC_PI_4),
        v.position,
    );
    let core_color = shade(STAR_COLOR, gain, v.opacity);
    out.push(InstanceRaw::oriented(core, core_color, core_color, false));

    let light = v.light_intensity / ornament_core::STAR_LIGHT_INTENSITY;
    if light > 0.0 {
        out.push(InstanceRaw::billboard(
            v.position,
            STAR_HALO_SIZE * v.scale * light,
            shade(STAR_COLOR, gain, v.opacity * 0.35),
        ));
    }
}

pub fn pack_swarm(swarm: &ChaoticSwarm, center: Vec3, out: &mut Vec<InstanceRaw>) {
    if !swarm.visible() {
        return;
    }
    let opacity = swarm.opacity();
    for (pos, p) in swarm.positions().iter().zip(swarm.particles()) {
        out.push(InstanceRaw::billboard(
            center + *pos,
            SWARM_POINT_SIZE,
            shade(p.color, 1.0, opacity),
        ));
    }
}

/// Photo frames as two-sided rectangles; fully shrunk frames are skipped.
pub fn pack_frames(frames: &[PhotoFrame], out: &mut Vec<InstanceRaw>) {
    for frame in frames {
        let pose = frame.pose();
        if pose.scale <= 1e-3 {
            continue;
        }
        let size = frame.half_extents() * 2.0;
        let model = Mat4::from_scale_rotation_translation(
            Vec3::new(size.x, size.y, 1.0),
            pose.rotation,
            pose.position,
        );
        out.push(InstanceRaw::oriented(
            model,
            FRAME_FRONT_COLOR,
            FRAME_BACK_COLOR,
            false,
        ));
    }
}

/// Every quad instance for one frame, reusing `out`'s allocation.
pub fn pack_scene(scene: &Scene, out: &mut Vec<InstanceRaw>) {
    out.clear();
    let origin = scene.origin();
    for batch in scene.ornaments() {
        pack_ornaments(batch, origin, out);
    }
    let star = scene.star();
    pack_star(star, out);
    pack_swarm(star.swarm(), star.visual().position, out);
    pack_frames(scene.gallery().frames(), out);
}
